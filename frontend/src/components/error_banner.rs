use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub message: Option<String>,
}

/// Inline error line; renders nothing when there is no message
#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    match &props.message {
        Some(message) => html! {
            <div class="error-banner" role="alert">{ message.clone() }</div>
        },
        None => html! {},
    }
}
