use yew::prelude::*;

use crate::content::Theme;

#[derive(Properties, PartialEq)]
pub struct IconBadgeProps {
    pub theme: Theme,
    #[prop_or(AttrValue::from("icon-md"))]
    pub size: AttrValue,
    /// Keeps the inner glow lit instead of waiting for hover.
    #[prop_or_default]
    pub lit: bool,
}

#[function_component(IconBadge)]
pub fn icon_badge(props: &IconBadgeProps) -> Html {
    html! {
        <div class={classes!("icon-badge", props.size.to_string(), props.theme.class())}>
            <div class="icon-ring"></div>
            <div class="icon-core"></div>
            <div class={classes!("icon-glow", props.lit.then_some("lit"))}></div>
        </div>
    }
}
