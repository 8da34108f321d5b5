use leptos::prelude::*;

use crate::session::use_session;

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let session = use_session();
    let viewer_label = move || {
        session.get().map(|viewer| match viewer {
            Some(user) => user.name.unwrap_or(user.id),
            None => "Signed out".to_string(),
        })
    };

    view! {
        <header class="site-header">
            <div class="header-inner">
                <a href="/" class="logo">"Promptfeed"</a>
                <nav>
                    <a href="/">"Feed"</a>
                    <a href="/profile">"My profile"</a>
                    <span class="viewer">
                        <Transition fallback=|| "...">{viewer_label}</Transition>
                    </span>
                </nav>
            </div>
        </header>
        <main class="site-main">
            {children()}
        </main>
    }
}
