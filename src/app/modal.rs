use crate::booking::types::{Reservation, Space};

/// The closed set of modals the UI can show, each carrying its own typed
/// payload and dispatched by exhaustive matching.
#[derive(Debug, Clone, PartialEq)]
pub enum Modal {
    SpacePicker,
    Reserve { space: Space },
    ReservationDetail { reservation: Reservation },
    ReservationCancel { reservation_id: String },
    UploadReturnPicture { reservation_id: String },
}

/// At most one modal is open at a time; opening another replaces it.
#[derive(Debug, Default)]
pub struct ModalStore {
    current: Option<Modal>,
}

impl ModalStore {
    pub fn open(&mut self, modal: Modal) {
        self.current = Some(modal);
    }

    pub fn close(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&Modal> {
        self.current.as_ref()
    }
}
