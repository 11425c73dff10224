//! Projects gallery state: filter controls, item visibility, detail modal,
//! and scroll-reveal bookkeeping.
//!
//! DESIGN
//! ======
//! Components render this state and never touch visibility directly.
//! Filtering is reset-then-set over the controls so exactly one is active.
//! The modal keeps the last projected record even after it is closed.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use std::time::Duration;

use crate::catalog::{self, PROJECTS, ProjectRecord};
use crate::util::reveal::{REVEAL_CLASS, reveal_delay};
use crate::util::visibility::Visibility;

/// Wildcard filter token matching every item.
pub const FILTER_ALL: &str = "*";

/// One entry in the filter bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterControl {
    pub label: &'static str,
    /// Value of the control's `data-filter` attribute.
    pub token: &'static str,
    pub active: bool,
}

/// Gallery card projected from a catalog record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryItem {
    pub project_id: u32,
    /// Heading text rendered on the card.
    pub title: &'static str,
    pub category: &'static str,
    pub image_url: &'static str,
    /// Category classes the filter matches against.
    pub classes: Vec<&'static str>,
    pub visibility: Visibility,
    pub reveal_delay: Duration,
    /// True while the viewport observer is waiting for this item.
    pub armed: bool,
    pub revealed: bool,
}

impl GalleryItem {
    fn from_record(record: &ProjectRecord) -> Self {
        Self {
            project_id: record.id,
            title: record.title,
            category: record.category,
            image_url: record.image_url,
            classes: catalog::category_class(record.category).into_iter().collect(),
            visibility: Visibility::Shown,
            reveal_delay: Duration::ZERO,
            armed: false,
            revealed: false,
        }
    }

    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| *c == class)
    }

    /// Full `class` attribute for the card element.
    #[must_use]
    pub fn class_list(&self) -> String {
        let mut classes = vec!["col-lg-4", "col-md-6", "projects-item"];
        classes.extend(self.classes.iter().copied());
        if self.revealed {
            classes.push("animate__animated");
            classes.push(REVEAL_CLASS);
        }
        classes.join(" ")
    }
}

/// A labelled row in the modal's info list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InfoRow {
    pub label: &'static str,
    pub value: &'static str,
    /// Target of the row's link, rendered in a new tab.
    pub link: Option<&'static str>,
}

/// Detail modal content projected from a catalog record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModalView {
    pub project_id: u32,
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub image_url: &'static str,
    pub info: Vec<InfoRow>,
}

impl ModalView {
    #[must_use]
    pub fn from_record(record: &ProjectRecord) -> Self {
        Self {
            project_id: record.id,
            title: record.title,
            category: record.category,
            description: record.description,
            image_url: record.image_url,
            info: vec![
                InfoRow { label: "Client", value: record.client, link: None },
                InfoRow { label: "Date", value: record.date, link: None },
                InfoRow { label: "Technologies", value: record.technologies, link: None },
                InfoRow { label: "Website", value: record.url, link: Some(record.url) },
            ],
        }
    }
}

/// State for the whole projects section.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryState {
    pub filters: Vec<FilterControl>,
    pub items: Vec<GalleryItem>,
    /// Last project shown in the modal.
    pub modal: Option<ModalView>,
    pub modal_open: bool,
}

impl Default for GalleryState {
    fn default() -> Self {
        Self::from_catalog(PROJECTS)
    }
}

impl GalleryState {
    /// Build gallery state with every item visible and "All" active.
    #[must_use]
    pub fn from_catalog(records: &[ProjectRecord]) -> Self {
        Self {
            filters: default_filters(),
            items: records.iter().map(GalleryItem::from_record).collect(),
            modal: None,
            modal_open: false,
        }
    }

    /// Activate the filter control at `index` and apply its token.
    ///
    /// Returns `false` without changing anything if `index` is out of range.
    pub fn activate_filter(&mut self, index: usize) -> bool {
        let Some(token) = self.filters.get(index).map(|f| f.token) else {
            return false;
        };
        for control in &mut self.filters {
            control.active = false;
        }
        self.filters[index].active = true;
        log::debug!("gallery filter activated: {token}");
        self.filter(token);
        true
    }

    /// Show items matching `token` and hide the rest.
    pub fn filter(&mut self, token: &str) {
        for item in &mut self.items {
            let shown = token == FILTER_ALL || item.has_class(token);
            item.visibility = Visibility::from_shown(shown);
        }
    }

    #[must_use]
    pub fn active_filter(&self) -> Option<&FilterControl> {
        self.filters.iter().find(|f| f.active)
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.items.iter().filter(|item| item.visibility.is_shown()).count()
    }

    /// Project the record titled `displayed_title` into the modal and show it.
    ///
    /// Returns `false` and leaves the modal untouched when no record has that
    /// exact title.
    pub fn open_details(&mut self, displayed_title: &str) -> bool {
        let Some(record) = catalog::find_by_title(displayed_title) else {
            log::debug!("no project titled {displayed_title:?}");
            return false;
        };
        self.modal = Some(ModalView::from_record(record));
        self.modal_open = true;
        true
    }

    pub fn close_details(&mut self) {
        self.modal_open = false;
    }

    /// Assign staggered reveal delays and arm every unrevealed item.
    pub fn animate_on_scroll(&mut self, stagger: Duration) {
        for (index, item) in self.items.iter_mut().enumerate() {
            item.reveal_delay = reveal_delay(index, stagger);
            item.armed = !item.revealed;
        }
    }

    /// Mark the item revealed the first time its observer fires.
    ///
    /// Returns `true` only on that first call; the item is disarmed after.
    pub fn reveal(&mut self, project_id: u32) -> bool {
        let Some(item) = self.items.iter_mut().find(|item| item.project_id == project_id) else {
            return false;
        };
        if !item.armed || item.revealed {
            return false;
        }
        item.armed = false;
        item.revealed = true;
        true
    }
}

fn default_filters() -> Vec<FilterControl> {
    vec![
        FilterControl { label: "All", token: FILTER_ALL, active: true },
        FilterControl { label: "Web", token: "filter-web", active: false },
        FilterControl { label: "App", token: "filter-app", active: false },
        FilterControl { label: "Design", token: "filter-design", active: false },
    ]
}
