#![allow(dead_code)]

use clipstack::clipboard::MemoryPasteboard;
use clipstack::config::Settings;
use clipstack::system::timer::{ManualClock, TimerQueue};
use clipstack::ui::{ConsoleBezel, ConsoleHost, ConsoleMenu};
use clipstack::{ClippingStack, Collaborators, Interactions};

/// Pile et collaborateurs en memoire, rendus captures dans des Vec<u8>.
pub struct Harness {
    pub stack: ClippingStack,
    pub pasteboard: MemoryPasteboard,
    pub bezel: ConsoleBezel<Vec<u8>>,
    pub menu: ConsoleMenu<Vec<u8>>,
    pub host: ConsoleHost<Vec<u8>>,
    pub settings: Settings,
    pub clock: ManualClock,
    pub timers: TimerQueue<ManualClock>,
}

impl Harness {
    /// `texts[0]` devient l'element le plus recent.
    pub fn with(texts: &[&str]) -> Self {
        let mut stack = ClippingStack::new(40);
        for t in texts.iter().rev() {
            stack.insert(*t);
        }
        let clock = ManualClock::new();
        Self {
            stack,
            pasteboard: MemoryPasteboard::new(),
            bezel: ConsoleBezel::new(Vec::new(), false),
            menu: ConsoleMenu::new(Vec::new(), 40, false),
            host: ConsoleHost::new(Vec::new()),
            settings: Settings::default(),
            timers: TimerQueue::new(clock.clone()),
            clock,
        }
    }

    pub fn ctl(&mut self) -> Interactions<'_> {
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

    pub fn texts(&self) -> Vec<String> {
        self.stack.texts()
    }
}
