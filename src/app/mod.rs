use crate::booking::types::UserDto;
use crate::timetable::layout::VisibleWindow;
use modal::ModalStore;

pub mod modal;


/// UI-facing state that the web frontend held in global singleton stores:
/// the signed-in user, the open modal and the onboarding-guide flag. Lives
/// for the whole process, owned by the keychain instead of ambient statics.
#[derive(Debug, Default)]
pub struct AppContext {
    user: Option<UserDto>,
    modal: ModalStore,
    show_guide: bool,
}

impl AppContext {
    pub fn user(&self) -> Option<&UserDto> { self.user.as_ref() }

    pub fn set_user(&mut self, user: Option<UserDto>) { self.user = user; }

    pub fn modal(&self) -> &ModalStore { &self.modal }

    pub fn modal_mut(&mut self) -> &mut ModalStore { &mut self.modal }

    pub fn show_guide(&self) -> bool { self.show_guide }

    pub fn set_show_guide(&mut self, show_guide: bool) { self.show_guide = show_guide; }

    /// The daily timetable renders a shortened window while the guide runs.
    pub fn daily_window(&self) -> VisibleWindow {
        if self.show_guide { VisibleWindow::GUIDED } else { VisibleWindow::DAILY }
    }
}
