/// Something the user did while an overlay was showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayEvent {
    Key(String),
    BackdropClick,
    ContentClick,
    CloseButton,
}

/// Whether `event` should close an overlay whose open flag is `open`.
pub fn should_close(open: bool, event: &OverlayEvent) -> bool {
    if !open {
        return false;
    }
    match event {
        OverlayEvent::Key(key) => key == "Escape",
        OverlayEvent::BackdropClick | OverlayEvent::CloseButton => true,
        OverlayEvent::ContentClick => false,
    }
}
