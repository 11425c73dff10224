//! Project detail modal.

use leptos::prelude::*;

use crate::state::gallery::{GalleryState, InfoRow, ModalView};

/// Dialog showing the project last opened from the gallery.
///
/// Closes on backdrop click, the close button, or Escape.
#[component]
pub fn ProjectModal() -> impl IntoView {
    let gallery = expect_context::<RwSignal<GalleryState>>();

    let on_close = Callback::new(move |()| gallery.update(GalleryState::close_details));
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };
    let shown = move || gallery.with(|g| if g.modal_open { g.modal.clone() } else { None });

    move || {
        shown().map(|modal| {
            view! {
                <div class="modal-backdrop show" on:click=move |_| on_close.run(())></div>
                <div
                    id="projectDetailsModal"
                    class="modal fade show"
                    style="display: block"
                    tabindex="-1"
                    role="dialog"
                    on:click=move |_| on_close.run(())
                    on:keydown=on_keydown
                >
                    <div class="modal-dialog modal-lg modal-dialog-centered" on:click=move |ev| ev.stop_propagation()>
                        <div class="modal-content">
                            <div class="modal-header">
                                <h5 class="modal-title project-modal-title">{modal.title}</h5>
                                <button
                                    type="button"
                                    class="btn-close"
                                    aria-label="Close"
                                    on:click=move |_| on_close.run(())
                                ></button>
                            </div>
                            <ModalBody modal=modal/>
                        </div>
                    </div>
                </div>
            }
        })
    }
}

#[component]
fn ModalBody(modal: ModalView) -> impl IntoView {
    view! {
        <div class="modal-body">
            <div class="row">
                <div class="col-lg-6">
                    <img src=modal.image_url class="img-fluid project-modal-img" alt=modal.title/>
                </div>
                <div class="col-lg-6">
                    <span class="project-modal-category">{modal.category}</span>
                    <p class="project-modal-description">{modal.description}</p>
                    <div class="project-modal-info">
                        <ul>{modal.info.into_iter().map(info_row).collect_view()}</ul>
                    </div>
                </div>
            </div>
        </div>
    }
}

fn info_row(row: InfoRow) -> impl IntoView {
    let value = match row.link {
        Some(href) => view! { <a href=href target="_blank">{row.value}</a> }.into_any(),
        None => view! { <span>{row.value}</span> }.into_any(),
    };
    view! {
        <li>
            <strong>{row.label}</strong>
            ": "
            {value}
        </li>
    }
}
