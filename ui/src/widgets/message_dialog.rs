use egui::{Id, Key, Modal, RichText, Ui};

use crate::state::State;

/// Modal error or success message, closed with OK or Escape.
///
/// The form behind it ignores pointer input while it is open.
pub fn message_dialog(state: &mut State, ui: &mut Ui) {
    let Some(message) = state.message.as_ref() else {
        return;
    };

    let mut dismissed = false;
    Modal::new(Id::new("message_dialog")).show(ui.ctx(), |ui| {
        ui.set_min_width(260.0);
        ui.heading(message.title.as_str());
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.label(
                RichText::new(message.kind.icon())
                    .size(20.0)
                    .color(message.kind.color()),
            );
            ui.label(RichText::new(&message.text).color(message.kind.color()));
        });
        ui.add_space(8.0);
        ui.vertical_centered(|ui| {
            if ui.button("OK").clicked() {
                dismissed = true;
            }
        });
    });

    // A click on the backdrop does not close the dialog
    if ui.input(|i| i.key_pressed(Key::Escape)) {
        dismissed = true;
    }
    if dismissed {
        state.dismiss_message();
    }
}

#[cfg(test)]
mod message_dialog_tests {
    use egui::Key;
    use kittest::Queryable;

    use crate::test_utils::state_harness;

    #[test]
    fn test_ok_dismisses_dialog() {
        let mut harness = state_harness(|ui, state| {
            super::message_dialog(state, ui);
        });
        harness
            .state_mut()
            .show_success("Success", "QR code saved as:\n/tmp/qr_code.png");
        harness.run();

        assert!(harness.query_by_label("Success").is_some());
        assert!(harness.query_by_label_contains("/tmp/qr_code.png").is_some());

        harness.get_by_label("OK").click();
        harness.run();

        assert!(harness.state().message.is_none());
        assert!(harness.query_by_label("OK").is_none());
    }

    #[test]
    fn test_escape_dismisses_dialog() {
        let mut harness = state_harness(|ui, state| {
            super::message_dialog(state, ui);
        });
        harness.state_mut().show_error("Save error", "disk full");
        harness.run();

        harness.key_press(Key::Escape);
        harness.run();

        assert!(harness.state().message.is_none());
    }

    #[test]
    fn test_form_behind_dialog_ignores_clicks() {
        let mut harness = state_harness(|ui, state| {
            super::super::action_buttons(state, ui);
            super::message_dialog(state, ui);
        });
        harness.state_mut().style.data = "hello".to_owned();
        harness
            .state_mut()
            .show_error("Error", "Please enter text or a link for the QR code");
        harness.run();

        harness.get_by_label("Generate QR code").click();
        harness.run();

        assert!(!harness.state().generation.is_running());
        assert!(!harness.state().has_generated());
        assert_eq!(
            harness.state().message.as_ref().map(|m| m.title.as_str()),
            Some("Error")
        );
    }
}
