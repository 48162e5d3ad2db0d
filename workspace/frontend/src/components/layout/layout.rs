use yew::prelude::*;
use yew_router::prelude::*;

use super::navbar::Navbar;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub children: Children,
}

#[function_component(Layout)]
pub fn layout(props: &Props) -> Html {
    let route = use_route::<Route>().unwrap_or(Route::NotFound);

    html! {
        <div class="min-h-screen bg-[#F8FAFC] font-sans text-gray-900">
            <Navbar active={route} />
            <main class="p-6 md:p-12">
                <div class="max-w-7xl mx-auto space-y-8">
                    { for props.children.iter() }
                </div>
            </main>
        </div>
    }
}
