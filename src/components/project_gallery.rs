//! Projects gallery: filter bar, project cards, and the detail modal.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads and writes `GalleryState` from context. Cards are rendered once
//! from the catalog; filtering and reveal only change their classes and
//! `display` style.

use leptos::prelude::*;

use crate::components::project_modal::ProjectModal;
use crate::config::SiteConfig;
use crate::state::gallery::{GalleryItem, GalleryState};
use crate::util::reveal::animation_delay_style;

/// Filterable grid of project cards.
#[component]
pub fn ProjectGallery() -> impl IntoView {
    let gallery = expect_context::<RwSignal<GalleryState>>();
    let config = expect_context::<SiteConfig>();

    gallery.update(|g| g.animate_on_scroll(config.reveal_stagger));

    let filters = gallery.with_untracked(|g| g.filters.iter().map(|f| (f.label, f.token)).collect::<Vec<_>>());
    let items = gallery.with_untracked(|g| g.items.clone());

    view! {
        <div class="row">
            <div class="col-lg-12 d-flex justify-content-center">
                <ul id="projects-filters">
                    {filters
                        .into_iter()
                        .enumerate()
                        .map(|(index, (label, token))| {
                            let active = move || gallery.with(|g| g.filters.get(index).is_some_and(|f| f.active));
                            view! {
                                <li
                                    data-filter=token
                                    class:filter-active=active
                                    on:click=move |_| {
                                        gallery.update(|g| {
                                            g.activate_filter(index);
                                        });
                                    }
                                >
                                    {label}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </div>
        <div class="row projects-container">
            {items
                .into_iter()
                .enumerate()
                .map(|(index, item)| view! { <ProjectCard index=index item=item/> })
                .collect_view()}
        </div>
        <ProjectModal/>
    }
}

/// One gallery card with its details link.
#[component]
fn ProjectCard(index: usize, item: GalleryItem) -> impl IntoView {
    let gallery = expect_context::<RwSignal<GalleryState>>();
    let card_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "csr")]
    {
        let project_id = item.project_id;
        Effect::new(move || {
            let Some(card) = card_ref.get() else {
                return;
            };
            crate::util::reveal::observe_once(&card, move || {
                gallery.update(|g| {
                    g.reveal(project_id);
                });
            });
        });
    }

    let class = move || gallery.with(|g| g.items.get(index).map(GalleryItem::class_list).unwrap_or_default());
    let delay = animation_delay_style(item.reveal_delay);
    let style = move || {
        let display = gallery.with(|g| g.items.get(index).map_or("none", |i| i.visibility.display()));
        format!("display: {display}; {delay}")
    };

    let title = item.title;
    let on_details = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        gallery.update(|g| {
            g.open_details(title);
        });
    };

    view! {
        <div node_ref=card_ref class=class style=style>
            <div class="projects-wrap">
                <img src=item.image_url class="img-fluid" alt=title/>
                <div class="projects-info">
                    <h4>{title}</h4>
                    <p>{item.category}</p>
                    <div class="projects-links">
                        <a href="#" class="projects-details-link" title="More Details" on:click=on_details>
                            "Details"
                        </a>
                    </div>
                </div>
            </div>
        </div>
    }
}
