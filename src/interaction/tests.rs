//! Tests du controleur d'interactions.

use super::*;
use crate::clipboard::MemoryPasteboard;
use crate::config::Settings;
use crate::system::timer::{ManualClock, TimerQueue};
use crate::ui::ClearConfirmation;
use std::time::Duration;

#[derive(Default)]
struct FakeBezel {
    shown: bool,
    paste_on_select: bool,
    shows: Vec<(String, String)>,
    hides: usize,
}

impl Bezel for FakeBezel {
    fn show(&mut self, text: &str, label: &str) {
        self.shown = true;
        self.shows.push((text.to_string(), label.to_string()));
    }

    fn hide(&mut self) {
        self.shown = false;
        self.hides += 1;
    }

    fn is_shown(&self) -> bool {
        self.shown
    }

    fn should_selection_paste(&self) -> bool {
        self.paste_on_select
    }
}

#[derive(Default)]
struct FakeMenu {
    rebuilds: usize,
    paste_on_select: bool,
}

impl MenuRenderer for FakeMenu {
    fn rebuild(&mut self, _stack: &ClippingStack) {
        self.rebuilds += 1;
    }

    fn should_selection_paste(&self) -> bool {
        self.paste_on_select
    }
}

struct FakeHost {
    active: bool,
    hides: usize,
    asked: usize,
    answer: ClearConfirmation,
}

impl Default for FakeHost {
    fn default() -> Self {
        Self { active: false, hides: 0, asked: 0, answer: ClearConfirmation::accept() }
    }
}

impl AppHost for FakeHost {
    fn hide(&mut self) {
        self.active = false;
        self.hides += 1;
    }

    fn activate(&mut self) {
        self.active = true;
    }

    fn confirm_clear_all(&mut self) -> ClearConfirmation {
        self.asked += 1;
        self.answer
    }
}

struct Fixture {
    stack: ClippingStack,
    pasteboard: MemoryPasteboard,
    bezel: FakeBezel,
    menu: FakeMenu,
    host: FakeHost,
    settings: Settings,
    clock: ManualClock,
    timers: TimerQueue<ManualClock>,
}

impl Fixture {
    /// Pile dont `texts[0]` est l'element le plus recent.
    fn with(texts: &[&str]) -> Self {
        let mut stack = ClippingStack::new(50);
        for t in texts.iter().rev() {
            stack.insert(*t);
        }
        let clock = ManualClock::new();
        Self {
            stack,
            pasteboard: MemoryPasteboard::new(),
            bezel: FakeBezel::default(),
            menu: FakeMenu::default(),
            host: FakeHost::default(),
            settings: Settings::default(),
            timers: TimerQueue::new(clock.clone()),
            clock,
        }
    }

    fn numbered(count: usize) -> Self {
        let texts: Vec<String> = (0..count).map(|i| format!("clip{}", i)).collect();
        let refs: Vec<&str> = texts.iter().map(|s| s.as_str()).collect();
        Self::with(&refs)
    }

    fn ctl(&mut self) -> Interactions<'_> {
        Interactions::new(
            &mut self.stack,
            Collaborators {
                pasteboard: &mut self.pasteboard,
                bezel: &mut self.bezel,
                menu: &mut self.menu,
                app: &mut self.host,
                config: &mut self.settings,
                scheduler: &mut self.timers,
            },
        )
    }

    fn key(&mut self, key: Key) {
        self.ctl().on_key_down(KeyEvent::plain(key));
    }

    fn texts(&self) -> Vec<String> {
        self.stack.texts()
    }

    fn last_show(&self) -> (&str, &str) {
        let (text, label) = self.bezel.shows.last().expect("bezel shown");
        (text.as_str(), label.as_str())
    }
}

// ---------------------------------------------------------------------------
// Navigation
// ---------------------------------------------------------------------------

#[test]
fn test_down_walks_and_saturates() {
    let mut f = Fixture::with(&["A", "B", "C"]);
    f.key(Key::Down);
    assert_eq!(f.stack.position(), 1);
    assert_eq!(f.last_show(), ("B", "2"));
    f.key(Key::Down);
    assert_eq!(f.last_show(), ("C", "3"));
    f.key(Key::Down);
    assert_eq!(f.stack.position(), 2);
    assert_eq!(f.last_show(), ("C", "3"));
    assert!(f.host.active);
}

#[test]
fn test_right_and_left_mirror_down_and_up() {
    let mut f = Fixture::with(&["A", "B"]);
    f.key(Key::Right);
    assert_eq!(f.stack.position(), 1);
    f.key(Key::Left);
    assert_eq!(f.stack.position(), 0);
    f.key(Key::Up);
    assert_eq!(f.stack.position(), 0);
    assert_eq!(f.last_show(), ("A", "1"));
}

#[test]
fn test_page_keys_jump_by_ten() {
    let mut f = Fixture::numbered(25);
    f.key(Key::PageDown);
    assert_eq!(f.stack.position(), 10);
    f.key(Key::PageDown);
    f.key(Key::PageDown);
    assert_eq!(f.stack.position(), 24);
    f.key(Key::PageUp);
    assert_eq!(f.stack.position(), 14);
    assert_eq!(f.last_show().1, "15");
}

#[test]
fn test_home_and_end() {
    let mut f = Fixture::numbered(5);
    f.key(Key::End);
    assert_eq!(f.stack.position(), 4);
    assert_eq!(f.last_show(), ("clip4", "5"));
    f.key(Key::Home);
    assert_eq!(f.stack.position(), 0);
    assert_eq!(f.last_show(), ("clip0", "1"));
}

#[test]
fn test_digit_zero_selects_tenth() {
    let mut f = Fixture::numbered(12);
    f.key(Key::Digit(0));
    assert_eq!(f.stack.position(), 9);
    assert_eq!(f.last_show().1, "10");
    f.key(Key::KeypadDigit(3));
    assert_eq!(f.stack.position(), 2);
    f.key(Key::KeypadDigit(0));
    assert_eq!(f.stack.position(), 9);
}

#[test]
fn test_digit_clamps_to_last() {
    let mut f = Fixture::with(&["A", "B", "C"]);
    f.key(Key::Digit(7));
    assert_eq!(f.stack.position(), 2);
    assert_eq!(f.last_show(), ("C", "3"));
}

#[test]
fn test_navigation_on_empty_stack_shows_nothing() {
    let mut f = Fixture::with(&[]);
    for key in [Key::Down, Key::Up, Key::PageDown, Key::End, Key::Home, Key::Digit(4)] {
        f.key(key);
    }
    assert!(f.bezel.shows.is_empty());
    assert!(!f.host.active);
}

#[test]
fn test_escape_hides() {
    let mut f = Fixture::with(&["A"]);
    f.key(Key::Down);
    assert!(f.bezel.shown);
    f.key(Key::Escape);
    assert!(!f.bezel.shown);
    assert_eq!(f.host.hides, 1);
}

#[test]
fn test_unmapped_key_is_noop() {
    let mut f = Fixture::with(&["A", "B"]);
    f.key(Key::Tab);
    f.key(Key::Char('q'));
    assert_eq!(f.stack.position(), 0);
    assert!(f.bezel.shows.is_empty());
}

#[test]
fn test_hotkey_base_navigates_with_shift_reversing() {
    let mut f = Fixture::with(&["A", "B", "C"]);
    f.ctl().on_key_down(KeyEvent::plain(Key::Char('v')));
    f.ctl().on_key_down(KeyEvent::plain(Key::Char('v')));
    assert_eq!(f.stack.position(), 2);
    f.ctl().on_key_down(KeyEvent::shifted(Key::Char('v')));
    assert_eq!(f.stack.position(), 1);
    assert_eq!(f.last_show(), ("B", "2"));
}

#[test]
fn test_activation_hotkey_shows_top_then_advances() {
    let mut f = Fixture::with(&["A", "B", "C"]);
    f.stack.jump_to(2);
    f.ctl().on_activation_hotkey();
    assert_eq!(f.stack.position(), 0);
    assert_eq!(f.last_show(), ("A", "1"));
    f.ctl().on_activation_hotkey();
    assert_eq!(f.last_show(), ("B", "2"));
}

#[test]
fn test_display_out_of_range_falls_back_to_top() {
    let mut f = Fixture::with(&["A", "B"]);
    f.ctl().display_at(9);
    // Le texte retombe sur l'element 0, le libelle garde la position demandee
    assert_eq!(f.last_show(), ("A", "10"));
    f.ctl().display_at(1);
    assert_eq!(f.last_show(), ("B", "2"));
}

#[test]
fn test_repeated_navigation_never_hides() {
    let mut f = Fixture::numbered(4);
    f.key(Key::Down);
    f.key(Key::Down);
    f.key(Key::Up);
    assert_eq!(f.bezel.hides, 0);
    assert_eq!(f.bezel.shows.len(), 3);
}

// ---------------------------------------------------------------------------
// Suppression depuis le bezel
// ---------------------------------------------------------------------------

#[test]
fn test_delete_key_removes_current_and_redraws() {
    let mut f = Fixture::with(&["A", "B", "C"]);
    f.key(Key::Down);
    f.key(Key::Delete);
    assert_eq!(f.texts(), vec!["A", "C"]);
    assert_eq!(f.stack.position(), 1);
    assert_eq!(f.last_show(), ("C", "2"));
    assert_eq!(f.menu.rebuilds, 1);
}

#[test]
fn test_delete_key_emptying_stack_hides() {
    let mut f = Fixture::with(&["A"]);
    f.ctl().on_activation_hotkey();
    f.key(Key::ForwardDelete);
    assert!(f.stack.is_empty());
    assert!(!f.bezel.shown);
    assert_eq!(f.host.hides, 1);
    assert_eq!(f.menu.rebuilds, 1);
}

// ---------------------------------------------------------------------------
// Selection depuis le bezel
// ---------------------------------------------------------------------------

#[test]
fn test_return_places_current_item() {
    let mut f = Fixture::with(&["A", "B"]);
    f.key(Key::Down);
    f.key(Key::Return);
    assert_eq!(f.pasteboard.top_item().as_deref(), Some("B"));
    assert!(!f.bezel.shown);
    assert_eq!(f.timers.pending_len(), 0);
    assert_eq!(f.texts(), vec!["A", "B"]);
    assert_eq!(f.menu.rebuilds, 0);
}

#[test]
fn test_paste_mode_schedules_keystroke_after_delay() {
    let mut f = Fixture::with(&["A"]);
    f.bezel.paste_on_select = true;
    f.key(Key::KeypadEnter);
    assert_eq!(f.pasteboard.top_item().as_deref(), Some("A"));
    assert_eq!(f.timers.pending_len(), 1);

    f.clock.advance(Duration::from_millis(150));
    f.ctl().run_due_tasks();
    assert_eq!(f.pasteboard.paste_count(), 0);

    f.clock.advance(Duration::from_millis(50));
    f.ctl().run_due_tasks();
    assert_eq!(f.pasteboard.paste_count(), 1);
}

#[test]
fn test_pending_paste_can_be_cancelled() {
    let mut f = Fixture::with(&["A"]);
    f.bezel.paste_on_select = true;
    let id = f.ctl().perform_selection().expect("paste scheduled");
    // L'identifiant survit a l'evenement : l'hote annule plus tard
    assert!(f.timers.cancel(id));
    assert!(!f.timers.cancel(id));
    f.clock.advance(Duration::from_secs(1));
    f.ctl().run_due_tasks();
    assert_eq!(f.pasteboard.paste_count(), 0);
}

#[test]
fn test_place_returns_no_pending_paste() {
    let mut f = Fixture::with(&["A", "B"]);
    assert!(f.ctl().perform_selection().is_none());
    assert!(f.ctl().on_menu_item_activated(1, false).is_none());
    assert!(f.ctl().on_menu_paste(0).is_some());
    assert!(f.ctl().on_menu_item_activated(7, true).is_none());
    assert_eq!(f.timers.pending_len(), 1);
}

#[test]
fn test_modifier_release_returns_paste_id() {
    let mut f = Fixture::with(&["A"]);
    f.bezel.paste_on_select = true;
    f.settings.bezel.sticky = true;
    assert!(f.ctl().on_modifier_released().is_none());
    f.settings.bezel.sticky = false;
    assert!(f.ctl().on_modifier_released().is_some());
}

#[test]
fn test_selection_moves_to_top_when_enabled() {
    let mut f = Fixture::with(&["A", "B", "C"]);
    f.settings.behavior.move_clippings_after_use = true;
    f.key(Key::End);
    f.key(Key::Return);
    assert_eq!(f.texts(), vec!["C", "A", "B"]);
    assert_eq!(f.stack.position(), 0);
    assert_eq!(f.menu.rebuilds, 1);
}

#[test]
fn test_selection_on_empty_stack_is_noop() {
    let mut f = Fixture::with(&[]);
    f.ctl().perform_selection();
    assert!(f.pasteboard.top_item().is_none());
    assert_eq!(f.host.hides, 0);
}

#[test]
fn test_modifier_release_selects_unless_sticky() {
    let mut f = Fixture::with(&["A", "B"]);
    f.settings.bezel.sticky = true;
    f.key(Key::Down);
    f.ctl().on_modifier_released();
    assert!(f.pasteboard.top_item().is_none());
    assert!(f.bezel.shown);

    f.settings.bezel.sticky = false;
    f.ctl().on_modifier_released();
    assert_eq!(f.pasteboard.top_item().as_deref(), Some("B"));
    assert!(!f.bezel.shown);
}

// ---------------------------------------------------------------------------
// Menu
// ---------------------------------------------------------------------------

#[test]
fn test_menu_activation_on_cursor_resets_position() {
    let mut f = Fixture::with(&["A", "B", "C"]);
    f.settings.behavior.move_clippings_after_use = true;
    f.stack.jump_to(2);
    f.ctl().on_menu_item_activated(2, false);
    assert_eq!(f.texts(), vec!["C", "A", "B"]);
    assert_eq!(f.stack.position(), 0);
    assert_eq!(f.pasteboard.top_item().as_deref(), Some("C"));
    assert_eq!(f.menu.rebuilds, 1);
}

#[test]
fn test_menu_activation_below_cursor_shifts_cursor() {
    let mut f = Fixture::with(&["A", "B", "C", "D"]);
    f.settings.behavior.move_clippings_after_use = true;
    f.stack.jump_to(1);
    f.ctl().on_menu_item_activated(3, false);
    assert_eq!(f.texts(), vec!["D", "A", "B", "C"]);
    assert_eq!(f.stack.position(), 2);
    assert_eq!(f.stack.item_at(2).unwrap().full_text(), "B");
}

#[test]
fn test_menu_activation_above_cursor_keeps_cursor() {
    let mut f = Fixture::with(&["A", "B", "C", "D"]);
    f.settings.behavior.move_clippings_after_use = true;
    f.stack.jump_to(3);
    f.ctl().on_menu_item_activated(1, false);
    assert_eq!(f.texts(), vec!["B", "A", "C", "D"]);
    assert_eq!(f.stack.position(), 3);
}

#[test]
fn test_menu_activation_without_move_leaves_order() {
    let mut f = Fixture::with(&["A", "B"]);
    f.ctl().on_menu_item_activated(1, true);
    assert_eq!(f.texts(), vec!["A", "B"]);
    assert_eq!(f.pasteboard.top_item().as_deref(), Some("B"));
    assert_eq!(f.timers.pending_len(), 1);
    assert_eq!(f.menu.rebuilds, 0);
}

#[test]
fn test_menu_activation_out_of_range_hides() {
    let mut f = Fixture::with(&["A"]);
    f.ctl().on_menu_item_activated(4, false);
    assert!(f.pasteboard.top_item().is_none());
    assert_eq!(f.host.hides, 1);
}

#[test]
fn test_menu_selection_follows_menu_preference() {
    let mut f = Fixture::with(&["A"]);
    f.menu.paste_on_select = true;
    f.ctl().on_menu_selection(0);
    assert_eq!(f.timers.pending_len(), 1);

    let mut f = Fixture::with(&["A"]);
    f.ctl().on_menu_selection(0);
    assert_eq!(f.timers.pending_len(), 0);
    f.ctl().on_menu_paste(0);
    assert_eq!(f.timers.pending_len(), 1);
    f.ctl().on_menu_place(0);
    assert_eq!(f.timers.pending_len(), 1);
}

#[test]
fn test_menu_delete_rehomes_cursor() {
    let mut f = Fixture::with(&["A", "B", "C"]);
    f.stack.jump_to(2);
    f.ctl().on_menu_delete_activated(0);
    assert_eq!(f.texts(), vec!["B", "C"]);
    assert_eq!(f.stack.position(), 0);
    assert_eq!(f.menu.rebuilds, 1);
}

// ---------------------------------------------------------------------------
// Clear all
// ---------------------------------------------------------------------------

#[test]
fn test_clear_all_confirmed_clears_matching_pasteboard() {
    let mut f = Fixture::with(&["A"]);
    f.pasteboard.set("A");
    f.ctl().on_clear_all_requested();
    assert_eq!(f.host.asked, 1);
    assert!(f.stack.is_empty());
    assert_eq!(f.stack.position(), 0);
    assert_eq!(f.pasteboard.top_item().as_deref(), Some(""));
    assert!(f.pasteboard.is_autogenerated());
    assert_eq!(f.menu.rebuilds, 1);
}

#[test]
fn test_clear_all_keeps_unrelated_pasteboard() {
    let mut f = Fixture::with(&["A", "B"]);
    f.pasteboard.set("something else");
    f.settings.behavior.ask_before_clearing = false;
    f.ctl().on_clear_all_requested();
    assert_eq!(f.host.asked, 0);
    assert!(f.stack.is_empty());
    assert_eq!(f.pasteboard.top_item().as_deref(), Some("something else"));
    assert!(!f.pasteboard.is_autogenerated());
}

#[test]
fn test_clear_all_declined_changes_nothing() {
    let mut f = Fixture::with(&["A", "B"]);
    f.host.answer = ClearConfirmation::decline();
    f.ctl().on_clear_all_requested();
    assert_eq!(f.texts(), vec!["A", "B"]);
    assert_eq!(f.menu.rebuilds, 0);
    assert!(f.settings.behavior.ask_before_clearing);
}

#[test]
fn test_suppression_disables_asking_even_when_declined() {
    let mut f = Fixture::with(&["A"]);
    f.host.answer = ClearConfirmation::decline().suppressing();
    f.ctl().on_clear_all_requested();
    assert_eq!(f.stack.len(), 1);
    assert!(!f.settings.behavior.ask_before_clearing);

    f.ctl().on_clear_all_requested();
    assert_eq!(f.host.asked, 1);
    assert!(f.stack.is_empty());
}

#[test]
fn test_clear_all_on_empty_stack_does_not_rebuild() {
    let mut f = Fixture::with(&[]);
    f.settings.behavior.ask_before_clearing = false;
    f.ctl().on_clear_all_requested();
    assert_eq!(f.menu.rebuilds, 0);
}

// ---------------------------------------------------------------------------
// Presse-papiers entrant
// ---------------------------------------------------------------------------

#[test]
fn test_pasteboard_change_records_and_resets_cursor() {
    let mut f = Fixture::with(&["A", "B"]);
    f.stack.jump_to(1);
    assert!(f.ctl().on_pasteboard_changed("C", false));
    assert_eq!(f.texts(), vec!["C", "A", "B"]);
    assert_eq!(f.stack.position(), 0);
    assert_eq!(f.menu.rebuilds, 1);
}

#[test]
fn test_pasteboard_change_ignores_duplicates_and_autogenerated() {
    let mut f = Fixture::with(&["A"]);
    assert!(!f.ctl().on_pasteboard_changed("A", false));
    assert!(!f.ctl().on_pasteboard_changed("", false));
    assert!(!f.ctl().on_pasteboard_changed("B", true));
    assert_eq!(f.texts(), vec!["A"]);
    assert_eq!(f.menu.rebuilds, 0);
}
