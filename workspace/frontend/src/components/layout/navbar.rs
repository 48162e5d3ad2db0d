use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub active: Route,
}

#[function_component(Navbar)]
pub fn navbar(props: &Props) -> Html {
    let link_class = |route: Route| {
        if props.active == route {
            "px-4 py-2 rounded-full text-sm font-semibold bg-indigo-600 text-white shadow-sm"
        } else {
            "px-4 py-2 rounded-full text-sm font-medium text-gray-600 hover:bg-gray-100"
        }
    };

    html! {
        <div class="bg-white/80 backdrop-blur-md border-b border-gray-100 sticky top-0 z-40">
            <div class="max-w-7xl mx-auto flex items-center justify-between px-6 py-3">
                <div class="flex items-center gap-3">
                    <div class="w-9 h-9 rounded-lg bg-indigo-600 flex items-center justify-center text-white font-bold">
                        {"฿"}
                    </div>
                    <span class="text-lg font-bold tracking-tight">{"SalesBoard"}</span>
                    <span class="hidden md:inline text-sm text-gray-400">{ props.active.title() }</span>
                </div>
                <nav class="flex items-center gap-2">
                    <Link<Route> to={Route::Revenue} classes={classes!(link_class(Route::Revenue))}>
                        {"Revenue"}
                    </Link<Route>>
                    <Link<Route> to={Route::Sales} classes={classes!(link_class(Route::Sales))}>
                        {"Sales Team"}
                    </Link<Route>>
                </nav>
            </div>
        </div>
    }
}
