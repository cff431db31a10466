use gtk::gdk;
use gtk::prelude::*;
use gtk4 as gtk;

/// Keys that activate the dial when it has focus, alongside a click.
pub fn is_activation_key(key: gdk::Key) -> bool {
    matches!(key, gdk::Key::Return | gdk::Key::KP_Enter | gdk::Key::space)
}

/// Exposes the current speed to assistive technology.
pub fn announce(widget: &impl IsA<gtk::Widget>, description: &str) {
    let widget = widget.upcast_ref::<gtk::Widget>();
    widget.update_property(&[gtk::accessible::Property::Description(description)]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activation_keys() {
        assert!(is_activation_key(gdk::Key::Return));
        assert!(is_activation_key(gdk::Key::KP_Enter));
        assert!(is_activation_key(gdk::Key::space));
        assert!(!is_activation_key(gdk::Key::Escape));
        assert!(!is_activation_key(gdk::Key::a));
    }

    #[test]
    fn test_announce_only_touches_accessible_description() {
        // needs a display
        if gtk::init().is_err() {
            return;
        }
        let area = gtk::DrawingArea::new();
        announce(&area, "2");
        assert!(area.tooltip_text().is_none());
        assert!(!area.has_tooltip());
    }
}
