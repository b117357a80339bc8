//! Keyboard shortcuts, translated into the same actions the buttons emit

use egui::{Context, Key};

use shop_core::{CatalogIntent, CatalogView, Route};
use crate::UiAction;

/// Keys of interest pressed this frame
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct KeyPresses {
    pub left: bool,
    pub right: bool,
    pub escape: bool,
    pub backspace: bool,
}

impl KeyPresses {
    /// Read this frame's key presses. Nothing is reported while a text
    /// field has keyboard focus.
    pub fn read(ctx: &Context) -> Self {
        if ctx.wants_keyboard_input() {
            return Self::default();
        }

        ctx.input(|i| Self {
            left: i.key_pressed(Key::ArrowLeft),
            right: i.key_pressed(Key::ArrowRight),
            escape: i.key_pressed(Key::Escape),
            backspace: i.key_pressed(Key::Backspace),
        })
    }
}

/// Map key presses to actions for the current route
///
/// Paging keys respect the same bounds that disable the pager buttons.
pub fn shortcut_actions(keys: KeyPresses, route: &Route, view: &CatalogView) -> Vec<UiAction> {
    let mut actions = Vec::new();

    match route {
        Route::Catalog => {
            if keys.left && view.can_retreat() {
                actions.push(UiAction::Catalog(CatalogIntent::PageRetreated));
            }
            if keys.right && view.can_advance() {
                actions.push(UiAction::Catalog(CatalogIntent::PageAdvanced));
            }
        }
        Route::Product(_) => {
            if keys.escape || keys.backspace {
                actions.push(UiAction::Back);
            }
        }
    }

    actions
}
