use payloads::APIClient;
use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod config;
mod entities;
mod hooks;
mod i18n;
mod logs;
mod pages;
mod state;
mod utils;

use components::MainLayout;
use entities::{
    BalanceRecharges, Classes, CoffeeSales, MenuItems, PaymentRequests,
    Payments, Students, Teachers, Users,
};
use i18n::Lang;
use pages::{EntityListPage, NotFoundPage};
pub use state::State;

/// A client for the configured backend, carrying the stored credentials
/// and `lang` as the default language.
pub fn get_api_client(lang: Lang) -> APIClient {
    APIClient::new(config::backend_url(), config::request_context(lang))
}

#[function_component]
pub fn App() -> Html {
    use_effect_with((), |_| logs::init_logging());
    html! {
        <BrowserRouter>
            <MainLayout>
                <Switch<Route> render={switch} />
            </MainLayout>
        </BrowserRouter>
    }
}

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/students")]
    Students,
    #[at("/teachers")]
    Teachers,
    #[at("/users")]
    Users,
    #[at("/classes")]
    Classes,
    #[at("/payments")]
    Payments,
    #[at("/payment-requests")]
    PaymentRequests,
    #[at("/coffee-sales")]
    CoffeeSales,
    #[at("/menu")]
    MenuItems,
    #[at("/balance-recharges")]
    BalanceRecharges,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    pub const NAVIGATION: [Route; 9] = [
        Route::Students,
        Route::Teachers,
        Route::Users,
        Route::Classes,
        Route::Payments,
        Route::PaymentRequests,
        Route::CoffeeSales,
        Route::MenuItems,
        Route::BalanceRecharges,
    ];

    pub fn title_key(&self) -> Option<&'static str> {
        match self {
            Route::Students => Some("nav.students"),
            Route::Teachers => Some("nav.teachers"),
            Route::Users => Some("nav.users"),
            Route::Classes => Some("nav.classes"),
            Route::Payments => Some("nav.payments"),
            Route::PaymentRequests => Some("nav.payment_requests"),
            Route::CoffeeSales => Some("nav.coffee_sales"),
            Route::MenuItems => Some("nav.menu_items"),
            Route::BalanceRecharges => Some("nav.balance_recharges"),
            Route::Home | Route::NotFound => None,
        }
    }
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <Redirect<Route> to={Route::Students} /> },
        Route::Students => html! { <EntityListPage<Students> /> },
        Route::Teachers => html! { <EntityListPage<Teachers> /> },
        Route::Users => html! { <EntityListPage<Users> /> },
        Route::Classes => html! { <EntityListPage<Classes> /> },
        Route::Payments => html! { <EntityListPage<Payments> /> },
        Route::PaymentRequests => {
            html! { <EntityListPage<PaymentRequests> /> }
        }
        Route::CoffeeSales => html! { <EntityListPage<CoffeeSales> /> },
        Route::MenuItems => html! { <EntityListPage<MenuItems> /> },
        Route::BalanceRecharges => {
            html! { <EntityListPage<BalanceRecharges> /> }
        }
        Route::NotFound => html! { <NotFoundPage /> },
    }
}
