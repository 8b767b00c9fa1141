use yew::{html, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct TableProps {
    pub headers: Vec<&'static str>,
    #[prop_or_default]
    pub title: Option<String>,
    #[prop_or_default]
    pub subtitle: Option<String>,
    /// Table rows (`<tr>` elements).
    #[prop_or_default]
    pub children: Html,
}

pub struct Table;

impl Component for Table {
    type Message = ();
    type Properties = TableProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Table
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let caption = if props.title.is_some() || props.subtitle.is_some() {
            html! {
                <div class="px-6 py-4 border-b border-gray-200 bg-gray-50">
                    <div class="flex justify-between items-center">
                        if let Some(title) = &props.title {
                            <h2 class="text-xl font-semibold text-gray-800">{ title.clone() }</h2>
                        }
                        if let Some(subtitle) = &props.subtitle {
                            <div class="text-sm text-gray-500">{ subtitle.clone() }</div>
                        }
                    </div>
                </div>
            }
        } else {
            html! {}
        };

        html! {
            <div class="bg-white rounded-lg shadow overflow-hidden">
                { caption }
                <div class="overflow-x-auto">
                    <table class="min-w-full divide-y divide-gray-200">
                        <thead class="bg-gray-50">
                            <tr>
                                { for props.headers.iter().map(|header| html! {
                                    <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">
                                        { *header }
                                    </th>
                                }) }
                            </tr>
                        </thead>
                        <tbody class="bg-white divide-y divide-gray-200">
                            { props.children.clone() }
                        </tbody>
                    </table>
                </div>
            </div>
        }
    }
}
