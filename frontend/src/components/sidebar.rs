use leptos::*;
use rust_i18n::t;

use crate::navigation::{badge_style, menu, Activation, NavState, NodeId, COLLAPSED_WIDTH};

pub const SMALL_SCREEN_QUERY: &str = "(max-width: 1024px)";

const ITEM_CLASS: &str = "flex items-center w-full gap-3 rounded-md px-3 py-2 text-sm transition-colors";

fn item_class(active: bool) -> String {
    if active {
        format!("{} bg-sidebar-active-bg text-sidebar-active-text font-medium", ITEM_CLASS)
    } else {
        format!("{} text-sidebar-text hover:bg-sidebar-hover-bg", ITEM_CLASS)
    }
}

#[component]
pub fn Sidebar(nav: RwSignal<NavState>, pathname: Signal<String>) -> impl IntoView {
    create_effect(move |_| watch_small_screen(nav));
    create_effect(move |_| {
        let path = pathname.get();
        nav.update(|state| {
            state.reveal(menu(), &path);
            state.navigated();
        });
    });

    let collapsed = create_memo(move |_| nav.with(NavState::is_collapsed));
    let small_screen = create_memo(move |_| nav.with(NavState::is_small_screen));
    let popover_open = create_memo(move |_| nav.with(|s| s.popover().is_some()));
    let anchor = create_rw_signal(0.0_f64);
    let aside_class = move || {
        let base = "fixed inset-y-0 start-0 z-40 flex flex-col bg-sidebar-bg border-e border-border transition-all duration-200";
        if small_screen.get() && !nav.with(NavState::is_drawer_open) {
            format!("{} hidden", base)
        } else {
            base.to_string()
        }
    };

    view! {
        <Show when=move || small_screen.get() && nav.with(NavState::is_drawer_open)>
            <button
                type="button"
                aria-label=t!("sidebar.close").to_string()
                class="fixed inset-0 z-30 bg-overlay-backdrop"
                on:click=move |_| nav.update(NavState::close_drawer)
            ></button>
        </Show>
        <Show when=move || popover_open.get()>
            <button
                type="button"
                aria-hidden="true"
                tabindex="-1"
                class="fixed inset-0 z-30 cursor-default"
                on:click=move |_| nav.update(NavState::dismiss_popover)
            ></button>
        </Show>
        <aside
            class=aside_class
            style=move || format!("width: {}px", nav.with(NavState::width))
        >
            <div class="flex items-center justify-between h-16 px-4 border-b border-border">
                <Show when=move || !collapsed.get()>
                    <a href="/" class="text-lg font-semibold text-fg">{t!("app.name").to_string()}</a>
                </Show>
                <button
                    type="button"
                    class="p-2 rounded-md text-fg-muted hover:text-fg"
                    aria-label=move || {
                        let label = if collapsed.get() { t!("sidebar.expand") } else { t!("sidebar.collapse") };
                        label.to_string()
                    }
                    on:click=move |_| {
                        if small_screen.get_untracked() {
                            nav.update(NavState::close_drawer);
                        } else {
                            nav.update(NavState::toggle_collapsed);
                        }
                    }
                >
                    <i class=move || if small_screen.get() { "fas fa-times" } else { "fas fa-bars" }></i>
                </button>
            </div>
            <nav class="flex-1 overflow-y-auto px-2 py-4 space-y-4">
                {menu()
                    .sections()
                    .iter()
                    .map(|section| {
                        let title = section.title;
                        view! {
                            <div>
                                <Show when=move || !collapsed.get()>
                                    <p class="px-3 mb-1 text-xs font-semibold tracking-wider text-fg-muted">{title}</p>
                                </Show>
                                <ul class="space-y-1">
                                    {section
                                        .items
                                        .iter()
                                        .map(|id| view! { <li>{render_node(*id, nav, pathname, anchor)}</li> })
                                        .collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
            </nav>
        </aside>
        {move || {
            nav.with(|s| s.popover())
                .filter(|_| collapsed.get())
                .map(|id| popover_panel(id, nav, pathname, anchor))
        }}
    }
}

/// Sublinks of `id` beside the collapsed rail. Lives outside the scrolling
/// `<nav>` so the rail's overflow cannot clip it.
fn popover_panel(
    id: NodeId,
    nav: RwSignal<NavState>,
    pathname: Signal<String>,
    anchor: RwSignal<f64>,
) -> View {
    let title = menu().get(id).map(|node| node.title).unwrap_or_default();
    view! {
        <div
            data-popover=title
            class="fixed z-50 w-64 max-h-[80vh] overflow-y-auto rounded-md bg-surface-elevated shadow-lg border border-border p-2"
            style=move || {
                format!(
                    "top: {}px; inset-inline-start: {}px",
                    anchor.get(),
                    COLLAPSED_WIDTH + 8
                )
            }
        >
            <p class="px-3 py-1 text-xs font-semibold text-fg-muted">{title}</p>
            <ul class="space-y-1">{render_sublinks(id, nav, pathname, anchor)}</ul>
        </div>
    }
    .into_view()
}

/// Viewport top of the clicked control.
#[cfg(target_arch = "wasm32")]
fn anchor_top(ev: &ev::MouseEvent) -> Option<f64> {
    use wasm_bindgen::JsCast;

    let target = ev.current_target()?.dyn_into::<web_sys::Element>().ok()?;
    Some(target.get_bounding_client_rect().top())
}

#[cfg(not(target_arch = "wasm32"))]
fn anchor_top(_ev: &ev::MouseEvent) -> Option<f64> {
    None
}

fn render_node(
    id: NodeId,
    nav: RwSignal<NavState>,
    pathname: Signal<String>,
    anchor: RwSignal<f64>,
) -> View {
    let Some(node) = menu().get(id) else {
        return ().into_view();
    };
    let collapsed = move || nav.with(NavState::is_collapsed);
    let active = move || menu().is_active(id, &pathname.get());
    let icon = node.icon.map(|icon| view! { <i class=format!("{} w-5 text-center", icon)></i> });
    let title = node.title;

    if !node.has_children() {
        let href = node.href.unwrap_or("/");
        return view! {
            <a
                href=href
                class=move || item_class(active())
                title=title
                on:click=move |_| {
                    nav.update(|state| {
                        state.activate(menu(), id);
                    });
                }
            >
                {icon}
                <Show when=move || !collapsed()>
                    <span class="truncate">{title}</span>
                </Show>
            </a>
        }
        .into_view();
    }

    let expanded = move || nav.with(|s| s.is_expanded(id));
    let popover = move || nav.with(|s| s.popover() == Some(id));
    view! {
        <div>
            <button
                type="button"
                class=move || item_class(active())
                title=title
                aria-expanded=move || (expanded() || popover()).to_string()
                on:click=move |ev| {
                    if let Some(top) = anchor_top(&ev) {
                        anchor.set(top);
                    }
                    let mut outcome = Activation::Ignored;
                    nav.update(|state| outcome = state.activate(menu(), id));
                    log::debug!("sidebar {}: {:?}", title, outcome);
                }
            >
                {icon}
                <Show when=move || !collapsed()>
                    <span class="flex-1 text-start truncate">{title}</span>
                    <i class=move || if expanded() { "fas fa-chevron-up text-xs" } else { "fas fa-chevron-down text-xs" }></i>
                </Show>
            </button>
            <Show when=move || !collapsed() && expanded()>
                <ul class="mt-1 ms-8 space-y-1">{render_sublinks(id, nav, pathname, anchor)}</ul>
            </Show>
        </div>
    }
    .into_view()
}

fn render_sublinks(
    parent: NodeId,
    nav: RwSignal<NavState>,
    pathname: Signal<String>,
    anchor: RwSignal<f64>,
) -> View {
    menu()
        .children(parent)
        .into_iter()
        .map(|(id, node)| {
            if node.has_children() {
                return view! { <li>{render_node(id, nav, pathname, anchor)}</li> }.into_view();
            }
            let href = node.href.unwrap_or("/");
            let title = node.title;
            let badge = node.count.map(|count| {
                view! {
                    <span
                        class="ms-auto rounded-full px-2 py-0.5 text-xs font-semibold"
                        style=badge_style(title, count).css()
                    >
                        {count}
                    </span>
                }
            });
            view! {
                <li>
                    <a
                        href=href
                        class=move || item_class(pathname.get() == href)
                        on:click=move |_| nav.update(NavState::navigated)
                    >
                        <span class="truncate">{title}</span>
                        {badge}
                    </a>
                </li>
            }
            .into_view()
        })
        .collect_view()
}

#[cfg(target_arch = "wasm32")]
fn watch_small_screen(nav: RwSignal<NavState>) {
    use wasm_bindgen::{closure::Closure, JsCast};

    let Some(list) = web_sys::window().and_then(|w| w.match_media(SMALL_SCREEN_QUERY).ok().flatten())
    else {
        return;
    };
    nav.update(|state| state.set_small_screen(list.matches()));
    let closure = Closure::wrap(Box::new(move |event: web_sys::MediaQueryListEvent| {
        let _ = nav.try_update(|state| state.set_small_screen(event.matches()));
    }) as Box<dyn FnMut(_)>);
    if list
        .add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())
        .is_err()
    {
        log::warn!("could not watch {}", SMALL_SCREEN_QUERY);
    }
    closure.forget();
}

#[cfg(not(target_arch = "wasm32"))]
fn watch_small_screen(_nav: RwSignal<NavState>) {}
