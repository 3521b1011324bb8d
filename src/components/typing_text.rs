use std::rc::Rc;

use yew::prelude::*;

use crate::components::timed::use_timed_state;
use crate::config::TypingConfig;
use crate::utils::typing::TypingAnimator;

/// Current text of a typewriter cycling through `phrases`.
///
/// A different phrase list or timing restarts the cycle from the first
/// phrase and cancels whatever tick was pending.
#[hook]
pub fn use_typing_effect(phrases: Rc<[String]>, config: TypingConfig) -> String {
    let animator = {
        let phrases = phrases.clone();
        use_timed_state(move || TypingAnimator::new(phrases, config))
    };
    {
        let animator = animator.clone();
        use_effect_with_deps(
            move |(phrases, config): &(Rc<[String]>, TypingConfig)| {
                if animator.config() != *config {
                    tracing::debug!("tagline timing changed, restarting");
                    animator.set(TypingAnimator::new(phrases.clone(), *config));
                } else if animator.phrases() != &phrases[..] {
                    tracing::debug!(count = phrases.len(), "tagline phrases changed, restarting");
                    animator.set(animator.with_phrases(phrases.clone()));
                }
                || ()
            },
            (phrases, config),
        );
    }
    animator.displayed_text().to_string()
}

#[derive(Properties, PartialEq)]
pub struct TypedTaglineProps {
    pub phrases: Rc<[String]>,
    #[prop_or_default]
    pub config: TypingConfig,
}

#[function_component(TypedTagline)]
pub fn typed_tagline(props: &TypedTaglineProps) -> Html {
    let text = use_typing_effect(props.phrases.clone(), props.config);
    html! {
        <div class="hero-tagline">
            <span class="typed-text">{text}</span>
            <span class="typing-cursor"></span>
        </div>
    }
}
