use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::layout::layout::Layout;
use crate::components::revenue::RevenueView;
use crate::components::sales::SalesPerformanceView;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Revenue,
    #[at("/sales")]
    Sales,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    pub fn title(&self) -> &'static str {
        match self {
            Route::Revenue => "Revenue",
            Route::Sales => "Sales Team",
            Route::NotFound => "404",
        }
    }
}

pub fn switch(routes: Route) -> Html {
    log::debug!("Routing to: {:?}", routes);
    match routes {
        Route::Revenue => {
            log::trace!("Rendering Revenue page");
            html! { <Layout><RevenueView /></Layout> }
        }
        Route::Sales => {
            log::trace!("Rendering Sales Team page");
            html! { <Layout><SalesPerformanceView /></Layout> }
        }
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! {
                <Layout>
                    <div class="text-center py-24">
                        <h1 class="text-4xl font-extrabold text-gray-900">{"404 Not Found"}</h1>
                        <p class="text-gray-500 mt-2">{"There is no dashboard at this address."}</p>
                        <div class="mt-6">
                            <Link<Route> to={Route::Revenue} classes="text-indigo-600 font-semibold">
                                {"Back to revenue"}
                            </Link<Route>>
                        </div>
                    </div>
                </Layout>
            }
        }
    }
}
