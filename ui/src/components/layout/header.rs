use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::components::LangSelect;
use crate::i18n::translate;
use crate::{Route, State};

#[function_component]
pub fn Header() -> Html {
    let (state, _) = use_store::<State>();
    let lang = state.lang;
    let current = use_route::<Route>();

    let link = |route: Route| {
        let active = current.as_ref() == Some(&route);
        let label = route.title_key().map(|key| translate(lang, key));
        html! {
            <Link<Route>
                to={route}
                classes={classes!(
                    "px-3", "py-2", "rounded-md", "text-sm", "font-medium",
                    if active {
                        "bg-gray-200 dark:bg-gray-700"
                    } else {
                        "hover:bg-gray-100 dark:hover:bg-gray-800"
                    },
                )}
            >
                {label.unwrap_or_default()}
            </Link<Route>>
        }
    };

    html! {
        <header class="bg-white dark:bg-gray-800 border-b border-gray-200 dark:border-gray-700">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex-shrink-0">
                        <h1 class="text-xl font-semibold text-gray-900 dark:text-white">
                            {translate(lang, "app.title")}
                        </h1>
                    </div>
                    <div class="flex items-center space-x-4">
                        <LangSelect />
                    </div>
                </div>
                <nav class="flex flex-wrap gap-1 pb-2">
                    {for Route::NAVIGATION.iter().cloned().map(link)}
                </nav>
            </div>
        </header>
    }
}
