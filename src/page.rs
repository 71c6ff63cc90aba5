use crate::catalog::{Catalog, CatalogError, Presentation};
use crate::contact::{
    ContactError, ContactForm, Dispatched, Field, MailHandler, SubmissionTicket,
};
use crate::gallery::{image_slots, ImageSlot};
use crate::modal::{DetailTab, ModalController, ModalState, ScrollSurface};

/// Everything the page mutates: the overlay state machine and the contact form behind it.
#[derive(Debug)]
pub struct PageState<'c, S: ScrollSurface> {
    catalog: &'c Catalog,
    modal: ModalController<S>,
    contact: ContactForm,
}

impl<'c, S: ScrollSurface> PageState<'c, S> {
    pub fn new(catalog: &'c Catalog, surface: S) -> Self {
        Self {
            catalog,
            modal: ModalController::new(surface),
            contact: ContactForm::new(),
        }
    }

    pub fn modal(&self) -> &ModalState {
        self.modal.state()
    }

    pub fn contact(&self) -> &ContactForm {
        &self.contact
    }

    // Leaving the contact overlay, by close or by replacement, discards the form.
    fn leave_contact(&mut self) {
        if self.modal.state().is_contact() {
            self.contact.reset();
        }
    }

    pub fn open_contact(&mut self) {
        if !self.modal.state().is_contact() {
            self.contact.reset();
        }
        self.modal.open_contact();
    }

    pub fn open_gallery(&mut self, images: Vec<String>) -> bool {
        if images.is_empty() {
            return false;
        }
        self.leave_contact();
        self.modal.open_gallery(images)
    }

    pub fn open_detail(&mut self, id: &str) -> Result<(), CatalogError> {
        self.catalog.get(id)?;
        self.leave_contact();
        self.modal.open_detail(self.catalog, id)
    }

    /// Opens whichever overlay a card callback asks for.
    pub fn open_project(&mut self, id: &str) -> Result<(), CatalogError> {
        let record = self.catalog.get(id)?;
        match record.presentation {
            Presentation::Detail => self.open_detail(id),
            Presentation::Gallery => {
                let images = record.images.clone();
                self.open_gallery(images);
                Ok(())
            }
        }
    }

    pub fn select_tab(&mut self, tab: DetailTab) -> bool {
        self.modal.select_tab(tab)
    }

    pub fn close(&mut self) {
        self.leave_contact();
        self.modal.close();
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.contact.set(field, value);
    }

    pub fn submit_contact<H: MailHandler>(
        &mut self,
        handler: &H,
    ) -> Result<(SubmissionTicket, Dispatched), ContactError> {
        if !self.modal.state().is_contact() {
            return Err(ContactError::NotOpen);
        }
        self.contact.submit(handler)
    }

    pub fn handoff_elapsed(&mut self, ticket: SubmissionTicket) -> bool {
        self.contact.handoff_elapsed(ticket)
    }

    /// Closes the contact overlay once the success message has been shown.
    ///
    /// A ticket from a form that was closed or reset in the meantime does nothing.
    pub fn success_elapsed(&mut self, ticket: SubmissionTicket) -> bool {
        if !self.contact.success_elapsed(ticket) {
            return false;
        }
        if self.modal.state().is_contact() {
            self.modal.close();
        }
        true
    }

    /// Image tiles currently on screen, from the gallery overlay or the detail gallery tab.
    pub fn visible_image_slots(&self) -> Option<Vec<ImageSlot>> {
        match self.modal.state() {
            ModalState::Gallery(images) => Some(image_slots(images)),
            ModalState::Detail {
                project,
                tab: DetailTab::Gallery,
            } => Some(image_slots(&project.images)),
            _ => None,
        }
    }
}
