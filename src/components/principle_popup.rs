use yew::prelude::*;

use crate::components::icon::IconBadge;
use crate::components::timed::use_timed_state;
use crate::config::PopupConfig;
use crate::utils::popup::PopupState;

#[derive(Clone, PartialEq)]
pub struct PopupHandle {
    pub state: PopupState,
    /// Opens the sheet for the principle with this id.
    pub select: Callback<u32>,
    pub dismiss: Callback<()>,
}

#[hook]
pub fn use_popup(config: PopupConfig) -> PopupHandle {
    let popup = use_timed_state(move || PopupState::new(config));

    let select = {
        let popup = popup.clone();
        Callback::from(move |id: u32| popup.set(popup.select(id)))
    };
    let dismiss = {
        let popup = popup.clone();
        Callback::from(move |_: ()| popup.set(popup.close()))
    };

    PopupHandle {
        state: (*popup).clone(),
        select,
        dismiss,
    }
}

#[derive(Properties, PartialEq)]
pub struct PrinciplePopupProps {
    pub state: PopupState,
    pub on_dismiss: Callback<()>,
}

#[function_component(PrinciplePopup)]
pub fn principle_popup(props: &PrinciplePopupProps) -> Html {
    let state = &props.state;
    let shown = state.is_open() && !state.is_closing();
    let dismiss = props.on_dismiss.reform(|_: MouseEvent| ());

    let sheet = match state.selected() {
        Some(principle) => {
            let explore = {
                let on_dismiss = props.on_dismiss.clone();
                let page = principle.page;
                Callback::from(move |_: MouseEvent| {
                    tracing::info!(page, "detail pages are not routed yet");
                    on_dismiss.emit(());
                })
            };
            html! {
                <div class={classes!("popup-sheet", shown.then_some("shown"))}>
                    <div class="popup-handle"></div>
                    <div class="popup-heading">
                        <IconBadge theme={principle.theme} size="icon-lg" lit=true />
                        <h3 id="popup-title">{principle.title}</h3>
                    </div>
                    <p class="popup-details">{principle.details}</p>
                    <div class="popup-actions">
                        <button class="popup-explore" onclick={explore}>
                            {format!("Explore {}", principle.page)}
                        </button>
                        <button class="popup-close" onclick={dismiss.clone()}>{"Close"}</button>
                    </div>
                </div>
            }
        }
        None => html! {},
    };

    html! {
        <div
            class={classes!("popup-layer", (!state.is_open()).then_some("hidden"))}
            role="dialog"
            aria-modal="true"
            aria-labelledby="popup-title"
        >
            <div class={classes!("popup-backdrop", shown.then_some("shown"))} onclick={dismiss}></div>
            {sheet}
        </div>
    }
}
