use shared::Route;
use yew::prelude::*;

/// Client-side navigation, provided by the root component
#[derive(Clone, PartialEq)]
pub struct Navigator {
    navigate: Callback<Route>,
}

impl Navigator {
    pub fn new(navigate: Callback<Route>) -> Self {
        Self { navigate }
    }

    pub fn push(&self, route: Route) {
        self.navigate.emit(route);
    }

    /// Callback for `onclick` handlers that always go to `route`
    pub fn to(&self, route: Route) -> Callback<MouseEvent> {
        let navigate = self.navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            navigate.emit(route.clone());
        })
    }
}

#[hook]
pub fn use_navigator() -> Navigator {
    use_context::<Navigator>().unwrap_or_else(|| Navigator::new(Callback::noop()))
}
