use crate::catalog::{Catalog, CatalogError, ProjectRecord};

/// Something whose page-level scrolling can be switched off while an overlay is shown.
pub trait ScrollSurface: Clone {
    fn suppress(&self);
    fn restore(&self);
}

/// Scroll suppression held for as long as the guard lives.
///
/// Dropping the guard always restores scrolling, so every path that discards it
/// (close, controller teardown, unmount) releases the surface.
#[derive(Debug)]
pub struct ScrollLock<S: ScrollSurface> {
    surface: S,
}

impl<S: ScrollSurface> ScrollLock<S> {
    pub fn acquire(surface: S) -> Self {
        surface.suppress();
        Self { surface }
    }
}

impl<S: ScrollSurface> Drop for ScrollLock<S> {
    fn drop(&mut self) {
        self.surface.restore();
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DetailTab {
    #[default]
    Overview,
    Features,
    Gallery,
}

impl DetailTab {
    pub fn all() -> [DetailTab; 3] {
        [DetailTab::Overview, DetailTab::Features, DetailTab::Gallery]
    }

    pub fn label(&self) -> &'static str {
        match self {
            DetailTab::Overview => "Overview",
            DetailTab::Features => "Features",
            DetailTab::Gallery => "Gallery",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Contact,
    Gallery(Vec<String>),
    Detail {
        project: ProjectRecord,
        tab: DetailTab,
    },
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        !matches!(self, ModalState::Closed)
    }

    pub fn is_contact(&self) -> bool {
        matches!(self, ModalState::Contact)
    }

    pub fn gallery_images(&self) -> Option<&[String]> {
        match self {
            ModalState::Gallery(images) => Some(images.as_slice()),
            _ => None,
        }
    }

    pub fn detail(&self) -> Option<(&ProjectRecord, DetailTab)> {
        match self {
            ModalState::Detail { project, tab } => Some((project, *tab)),
            _ => None,
        }
    }
}

/// The single overlay state machine of the page.
#[derive(Debug)]
pub struct ModalController<S: ScrollSurface> {
    state: ModalState,
    surface: S,
    scroll_lock: Option<ScrollLock<S>>,
}

impl<S: ScrollSurface> ModalController<S> {
    pub fn new(surface: S) -> Self {
        Self {
            state: ModalState::Closed,
            surface,
            scroll_lock: None,
        }
    }

    pub fn state(&self) -> &ModalState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    fn open(&mut self, state: ModalState) {
        if self.scroll_lock.is_none() {
            self.scroll_lock = Some(ScrollLock::acquire(self.surface.clone()));
        }
        self.state = state;
    }

    pub fn open_contact(&mut self) {
        log::debug!("opening contact form");
        self.open(ModalState::Contact);
    }

    /// Shows a flat image grid. An empty list has nothing to show and leaves the state alone.
    pub fn open_gallery(&mut self, images: Vec<String>) -> bool {
        if images.is_empty() {
            return false;
        }
        log::debug!("opening gallery with {} images", images.len());
        self.open(ModalState::Gallery(images));
        true
    }

    /// Shows the detail view for `id`, always starting on the overview tab.
    ///
    /// Unknown ids leave the current state untouched.
    pub fn open_detail(&mut self, catalog: &Catalog, id: &str) -> Result<(), CatalogError> {
        let project = catalog.get(id)?.clone();
        log::debug!("opening project detail: {id}");
        self.open(ModalState::Detail {
            project,
            tab: DetailTab::Overview,
        });
        Ok(())
    }

    pub fn select_tab(&mut self, new_tab: DetailTab) -> bool {
        match &mut self.state {
            ModalState::Detail { tab, .. } => {
                *tab = new_tab;
                true
            }
            _ => false,
        }
    }

    pub fn close(&mut self) {
        self.state = ModalState::Closed;
        self.scroll_lock = None;
    }
}

#[cfg(test)]
pub(crate) mod test_surface {
    use std::sync::{
        atomic::{AtomicBool, AtomicUsize, Ordering},
        Arc,
    };

    use super::ScrollSurface;

    #[derive(Debug, Clone, Default)]
    pub struct RecordingSurface {
        suppressed: Arc<AtomicBool>,
        acquisitions: Arc<AtomicUsize>,
    }

    impl RecordingSurface {
        pub fn is_suppressed(&self) -> bool {
            self.suppressed.load(Ordering::SeqCst)
        }

        pub fn acquisitions(&self) -> usize {
            self.acquisitions.load(Ordering::SeqCst)
        }
    }

    impl ScrollSurface for RecordingSurface {
        fn suppress(&self) {
            self.suppressed.store(true, Ordering::SeqCst);
            self.acquisitions.fetch_add(1, Ordering::SeqCst);
        }

        fn restore(&self) {
            self.suppressed.store(false, Ordering::SeqCst);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_surface::RecordingSurface;
    use super::*;
    use crate::catalog::test_record;

    fn setup() -> (Catalog, RecordingSurface, ModalController<RecordingSurface>) {
        let catalog = Catalog::from_entries(vec![
            test_record("dalani", 5),
            test_record("artery", 6),
        ])
        .unwrap();
        let surface = RecordingSurface::default();
        let controller = ModalController::new(surface.clone());
        (catalog, surface, controller)
    }

    #[test]
    fn test_starts_closed() {
        let (_, surface, controller) = setup();
        assert_eq!(controller.state(), &ModalState::Closed);
        assert!(!surface.is_suppressed());
    }

    #[test]
    fn test_open_detail_for_every_catalog_entry() {
        let (catalog, _, mut controller) = setup();
        for record in catalog.iter() {
            controller.open_detail(&catalog, &record.id).unwrap();
            let (project, tab) = controller.state().detail().expect("detail should be open");
            assert_eq!(catalog.iter().filter(|r| r.id == project.id).count(), 1);
            assert_eq!(project, record);
            assert_eq!(tab, DetailTab::Overview);
        }
    }

    #[test]
    fn test_open_detail_unknown_id_is_noop() {
        let (catalog, surface, mut controller) = setup();
        assert!(controller.open_detail(&catalog, "missing").is_err());
        assert_eq!(controller.state(), &ModalState::Closed);
        assert!(!surface.is_suppressed());

        controller.open_contact();
        assert!(controller.open_detail(&catalog, "missing").is_err());
        assert_eq!(controller.state(), &ModalState::Contact);
    }

    #[test]
    fn test_opening_replaces_current_overlay() {
        let (catalog, surface, mut controller) = setup();
        controller.open_contact();
        controller.open_gallery(vec!["/a.png".to_string()]);
        assert_eq!(
            controller.state(),
            &ModalState::Gallery(vec!["/a.png".to_string()])
        );
        controller.open_detail(&catalog, "artery").unwrap();
        assert_eq!(controller.state().detail().unwrap().0.id, "artery");
        controller.open_contact();
        assert_eq!(controller.state(), &ModalState::Contact);
        // one lock held across all replacements
        assert_eq!(surface.acquisitions(), 1);
        assert!(surface.is_suppressed());
    }

    #[test]
    fn test_empty_gallery_is_noop() {
        let (_, surface, mut controller) = setup();
        assert!(!controller.open_gallery(vec![]));
        assert_eq!(controller.state(), &ModalState::Closed);
        assert!(!surface.is_suppressed());
    }

    #[test]
    fn test_close_restores_scroll_from_every_entry_path() {
        let (catalog, surface, mut controller) = setup();

        controller.open_contact();
        assert!(surface.is_suppressed());
        controller.close();
        assert!(!surface.is_suppressed());

        controller.open_gallery(vec!["/a.png".to_string()]);
        assert!(surface.is_suppressed());
        controller.close();
        assert!(!surface.is_suppressed());

        controller.open_detail(&catalog, "dalani").unwrap();
        controller.select_tab(DetailTab::Gallery);
        assert!(surface.is_suppressed());
        controller.close();
        assert!(!surface.is_suppressed());
        assert_eq!(controller.state(), &ModalState::Closed);

        // closing twice is harmless
        controller.close();
        assert!(!surface.is_suppressed());
    }

    #[test]
    fn test_teardown_restores_scroll() {
        let (catalog, surface, mut controller) = setup();
        controller.open_detail(&catalog, "dalani").unwrap();
        assert!(surface.is_suppressed());
        drop(controller);
        assert!(!surface.is_suppressed());
    }

    #[test]
    fn test_tab_switch_keeps_project() {
        let (catalog, _, mut controller) = setup();
        controller.open_detail(&catalog, "dalani").unwrap();
        for tab in DetailTab::all() {
            assert!(controller.select_tab(tab));
            let (project, current) = controller.state().detail().unwrap();
            assert_eq!(project.id, "dalani");
            assert_eq!(current, tab);
        }
    }

    #[test]
    fn test_switching_project_resets_tab() {
        let (catalog, _, mut controller) = setup();
        controller.open_detail(&catalog, "dalani").unwrap();
        controller.select_tab(DetailTab::Features);
        controller.open_detail(&catalog, "artery").unwrap();
        let (project, tab) = controller.state().detail().unwrap();
        assert_eq!(project.id, "artery");
        assert_eq!(tab, DetailTab::Overview);
    }

    #[test]
    fn test_select_tab_outside_detail() {
        let (_, _, mut controller) = setup();
        assert!(!controller.select_tab(DetailTab::Features));
        controller.open_contact();
        assert!(!controller.select_tab(DetailTab::Features));
        assert_eq!(controller.state(), &ModalState::Contact);
    }
}
