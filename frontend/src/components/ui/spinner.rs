use yew::{classes, html, Component, Context, Html, Properties};

#[derive(Clone, Copy, PartialEq, Default)]
pub enum SpinnerSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl SpinnerSize {
    fn class(self) -> &'static str {
        match self {
            SpinnerSize::Small => "h-6 w-6",
            SpinnerSize::Medium => "h-12 w-12",
            SpinnerSize::Large => "h-16 w-16",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct LoadingSpinnerProps {
    #[prop_or_default]
    pub size: SpinnerSize,
    /// Center the spinner on an otherwise empty page.
    #[prop_or_default]
    pub full_screen: bool,
}

pub struct LoadingSpinner;

impl Component for LoadingSpinner {
    type Message = ();
    type Properties = LoadingSpinnerProps;

    fn create(_ctx: &Context<Self>) -> Self {
        LoadingSpinner
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let spinner = html! {
            <div class={classes!("animate-spin", "rounded-full", "border-b-2", "border-blue-600", props.size.class())}></div>
        };

        if props.full_screen {
            html! {
                <div class="min-h-screen bg-gray-50 flex justify-center items-center">
                    { spinner }
                </div>
            }
        } else {
            spinner
        }
    }
}
