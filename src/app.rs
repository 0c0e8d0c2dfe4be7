use crate::components::Toaster;
use crate::features::auth::state::AuthProvider;
use crate::features::notice::provide_notices;
use crate::routes::AppRoutes;
use leptos::prelude::*;
use leptos_router::components::Router;

#[component]
pub fn App() -> impl IntoView {
    provide_notices();

    view! {
        <AuthProvider>
            <Router>
                <AppRoutes />
                <Toaster />
            </Router>
        </AuthProvider>
    }
}
