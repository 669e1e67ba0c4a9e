use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::pages::predict::PredictionPage;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/traffic-web.css"/>
        <Title text="Bangalore Traffic Prediction"/>
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=PredictionPage/>
                <Route path=path!("/form") view=PredictionPage/>
            </Routes>
        </Router>
    }
}
