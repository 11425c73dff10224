//! Single-page portfolio layout with the projects and contact sections.

use leptos::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::project_gallery::ProjectGallery;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main id="main">
            <section id="projects" class="projects section">
                <div class="container">
                    <div class="section-title">
                        <h2>"Projects"</h2>
                        <p>"A selection of recent work across web, app, and design."</p>
                    </div>
                    <ProjectGallery/>
                </div>
            </section>
            <section id="contact" class="contact section">
                <div class="container">
                    <div class="section-title">
                        <h2>"Contact"</h2>
                        <p>"Have a project in mind? Send a message."</p>
                    </div>
                    <ContactForm/>
                </div>
            </section>
        </main>
    }
}
