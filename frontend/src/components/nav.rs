use log::{debug, warn};
use wasm_bindgen::JsValue;
use web_sys::{MouseEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;

use crate::animation::{AnimationSpec, Hover, Motion, Pose};
use crate::components::reveal::use_entrance;
use crate::config;
use crate::content::{NavItem, SectionId};

/// Smooth-scrolls to the element with id `anchor`. Returns false when there
/// is no such element, so the caller can let the browser follow the link.
pub fn scroll_to_section(anchor: &str) -> bool {
    let element = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(anchor));
    match element {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            element.scroll_into_view_with_scroll_into_view_options(&options);
            true
        }
        None => false,
    }
}

/// Points the address bar at `fragment` without adding a history entry, for
/// jumps whose default link navigation was cancelled.
fn replace_fragment(fragment: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let replaced = window
        .history()
        .and_then(|history| history.replace_state_with_url(&JsValue::NULL, "", Some(fragment)));
    if let Err(err) = replaced {
        warn!("Could not update the URL fragment: {:?}", err);
    }
}

/// Section named by the current URL fragment, if any.
pub fn fragment_section() -> Option<SectionId> {
    let hash = web_sys::window()?.location().hash().ok()?;
    SectionId::from_anchor(&hash)
}

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub brand: AttrValue,
    pub items: Vec<NavItem>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let menu_open = use_state(|| false);
    let entered = use_entrance();
    let slide = Motion::new(
        Pose::shifted(config::HEADER_SLIDE),
        AnimationSpec::tween(config::REVEAL.duration),
    );

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let links = props
        .items
        .iter()
        .map(|item| {
            let target = item.target;
            let onclick = {
                let menu_open = menu_open.clone();
                let href = item.href();
                Callback::from(move |e: MouseEvent| {
                    if scroll_to_section(target.anchor()) {
                        e.prevent_default();
                        replace_fragment(&href);
                    }
                    debug!("Jumping to #{}", target);
                    menu_open.set(false);
                })
            };
            html! {
                <a
                    key={target.anchor()}
                    href={item.href()}
                    class={classes!("nav-link", Hover::Pop.class())}
                    onclick={onclick}
                >
                    {item.label()}
                </a>
            }
        })
        .collect::<Html>();

    let menu_class = if *menu_open {
        "nav-links mobile-menu-open"
    } else {
        "nav-links"
    };

    html! {
        <header class="site-header" style={slide.style(entered)}>
            <div class="header-content">
                <div class={classes!("brand", Hover::Grow.class())}>
                    <span class="brand-icon">{"🛍"}</span>
                    <span class="brand-name">{props.brand.clone()}</span>
                </div>
                <nav class={menu_class}>
                    {links}
                </nav>
                <button
                    class={classes!("burger-menu", Hover::Press.class())}
                    aria-label="Menu"
                    aria-expanded={(*menu_open).to_string()}
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
            <style>
                {r#"
                .site-header {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    z-index: 50;
                    background: rgba(255, 255, 255, 0.9);
                    backdrop-filter: blur(4px);
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                }
                .header-content {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 1.5rem 1rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .brand {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    color: #1f2937;
                }
                .brand-icon {
                    font-size: 2.25rem;
                }
                .brand-name {
                    font-size: 1.875rem;
                    font-weight: 300;
                    letter-spacing: 0.05em;
                }
                .nav-links {
                    display: flex;
                    gap: 3rem;
                }
                .nav-link {
                    display: inline-block;
                    color: #4b5563;
                    font-weight: 300;
                    letter-spacing: 0.025em;
                    text-decoration: none;
                }
                .nav-link:hover {
                    color: #1f2937;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    justify-content: space-between;
                    width: 24px;
                    height: 18px;
                    background: none;
                    border: none;
                    cursor: pointer;
                    padding: 0;
                }
                .burger-menu span {
                    display: block;
                    height: 2px;
                    width: 100%;
                    background: #1f2937;
                }
                @media (max-width: 1023px) {
                    .burger-menu {
                        display: flex;
                    }
                    .nav-links {
                        display: none;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        gap: 1.5rem;
                        padding: 1.5rem 1rem;
                        background: rgba(255, 255, 255, 0.97);
                        box-shadow: 0 4px 12px rgba(0, 0, 0, 0.08);
                    }
                    .nav-links.mobile-menu-open {
                        display: flex;
                    }
                }
                "#}
            </style>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use crate::content::{SectionId, SiteContent};

    #[test]
    fn test_written_fragment_opens_same_section() {
        let content = SiteContent::bundled().unwrap();
        for item in &content.nav {
            assert_eq!(SectionId::from_anchor(&item.href()), Some(item.target));
        }
        let services = content
            .nav
            .iter()
            .find(|item| item.target == SectionId::Services)
            .unwrap();
        assert_eq!(services.href(), "#servicos");
    }
}
