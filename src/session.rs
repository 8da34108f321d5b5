use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::api;
use crate::card::CardContext;
use crate::model::prompt::SessionUser;

/// The signed-in viewer, looked up once after hydration.
#[derive(Clone, Copy)]
pub struct ViewerSession(pub LocalResource<Option<SessionUser>>);

pub fn provide_session() {
    provide_context(ViewerSession(LocalResource::new(api::load_session)));
}

/// Resolved session resource, for views that suspend on it.
pub fn use_session() -> LocalResource<Option<SessionUser>> {
    expect_context::<ViewerSession>().0
}

/// The viewer, `None` while the lookup is pending or when signed out.
pub fn use_viewer() -> Signal<Option<SessionUser>> {
    let session = use_session();
    Signal::derive(move || session.get().flatten())
}

/// Viewer and current path, bundled for the cards of the calling page.
pub fn use_card_context() -> Signal<CardContext> {
    let viewer = use_viewer();
    let location = use_location();
    Signal::derive(move || CardContext::new(viewer.get(), location.pathname.get()))
}
