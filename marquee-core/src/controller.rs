//! Application context coordinating navigation, rendering and feedback
//!
//! The `Marquee` owns every piece of runtime state (catalog cursor, LED
//! colour) and is owned by the polling loop. Peripherals are lent to each
//! operation, so nothing here is global.

use crate::config::{ConfigError, DemoConfig, FeedbackConfig, MessageCatalog};
use crate::state::{ButtonId, Event, LedColor, Navigator};
use crate::text::{LineLayout, LineWrapper};
use crate::traits::{Button, DisplayError, Indicator, TextDisplay, ToneOutput};

/// Result of handling one navigation event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Transition {
    /// Event that was applied
    pub event: Event,
    /// Catalog index now shown
    pub index: usize,
    /// Colour the LED showed for this press
    pub shown_color: LedColor,
    /// Outcome of redrawing the display
    pub display: Result<(), DisplayError>,
}

/// Message cycling state
pub struct Marquee {
    catalog: MessageCatalog,
    wrapper: LineWrapper,
    layout: LineLayout,
    feedback: FeedbackConfig,
    nav: Navigator,
    color: LedColor,
}

impl Marquee {
    /// Validate the configuration against the catalog and start at message 0, colour red
    pub fn new(catalog: MessageCatalog, config: &DemoConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let wrapper = config.layout.wrapper()?;
        catalog.check_fits(&wrapper)?;
        let nav = Navigator::new(catalog.len()).ok_or(ConfigError::EmptyCatalog)?;

        Ok(Self {
            catalog,
            wrapper,
            layout: config.layout.line_layout(),
            feedback: config.feedback,
            nav,
            color: LedColor::default(),
        })
    }

    /// Index of the message currently shown
    pub fn index(&self) -> usize {
        self.nav.index()
    }

    /// Colour the LED will show on the next press
    pub fn color(&self) -> LedColor {
        self.color
    }

    /// Message currently shown
    pub fn message(&self) -> &'static str {
        self.catalog.get(self.nav.index()).unwrap_or("")
    }

    /// The message catalog
    pub fn catalog(&self) -> &MessageCatalog {
        &self.catalog
    }

    /// Redraw the display with message `index`, starting at the top
    ///
    /// An out-of-range index leaves the display blank.
    pub fn render<D: TextDisplay>(&self, index: usize, display: &mut D) -> Result<(), DisplayError> {
        display.clear()?;

        if let Some(message) = self.catalog.get(index) {
            // Every message was checked against the wrapper in new()
            let lines = self.wrapper.wrap(message).unwrap_or_default();
            for (x, y, line) in self.layout.place(&lines) {
                display.draw_text(x, y, line)?;
            }
        }

        display.flush()
    }

    /// Redraw the display with the current message
    pub fn show_current<D: TextDisplay>(&self, display: &mut D) -> Result<(), DisplayError> {
        self.render(self.nav.index(), display)
    }

    /// Apply a navigation event and run its feedback sequence
    ///
    /// Order: redraw, click, tone, LED hold in the current colour, colour
    /// step. A display failure is reported in the returned [`Transition`]
    /// and does not stop the feedback.
    pub fn handle<D, T, L>(
        &mut self,
        event: Event,
        display: &mut D,
        buzzer: &mut T,
        led: &mut L,
    ) -> Transition
    where
        D: TextDisplay,
        T: ToneOutput,
        L: Indicator,
    {
        let index = self.nav.apply(event);
        let display_result = self.show_current(display);

        buzzer.click(self.feedback.click_ms);
        buzzer.tone(self.feedback.tone_hz, self.feedback.tone_ms);

        let shown_color = self.color;
        led.show(shown_color, self.feedback.led_hold_ms);
        self.color = shown_color.next();

        Transition {
            event,
            index,
            shown_color,
            display: display_result,
        }
    }

    /// Read one button and handle its event if it is pressed
    ///
    /// The polling loop calls this for each of [`ButtonId::ALL`] in turn
    /// and waits out the debounce after every press handled, so holding
    /// both buttons alternates forward and backward steps.
    pub fn poll_button<B, D, T, L>(
        &mut self,
        id: ButtonId,
        button: &B,
        display: &mut D,
        buzzer: &mut T,
        led: &mut L,
    ) -> Option<Transition>
    where
        B: Button + ?Sized,
        D: TextDisplay,
        T: ToneOutput,
        L: Indicator,
    {
        if !button.is_pressed() {
            return None;
        }
        Some(self.handle(Event::from_button(id), display, buzzer, led))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    enum Op {
        Clear,
        Text(i32, i32, String),
        Flush,
        Click(u32),
        Tone(u32, u32),
        Led(LedColor, u32),
    }

    type Log = Rc<RefCell<Vec<Op>>>;

    struct MockDisplay {
        log: Log,
        fail_flush: bool,
    }

    impl TextDisplay for MockDisplay {
        fn clear(&mut self) -> Result<(), DisplayError> {
            self.log.borrow_mut().push(Op::Clear);
            Ok(())
        }

        fn draw_text(&mut self, x: i32, y: i32, text: &str) -> Result<(), DisplayError> {
            self.log.borrow_mut().push(Op::Text(x, y, text.into()));
            Ok(())
        }

        fn flush(&mut self) -> Result<(), DisplayError> {
            if self.fail_flush {
                return Err(DisplayError::Communication);
            }
            self.log.borrow_mut().push(Op::Flush);
            Ok(())
        }
    }

    struct MockBuzzer(Log);

    impl ToneOutput for MockBuzzer {
        fn tone(&mut self, frequency_hz: u32, duration_ms: u32) {
            self.0.borrow_mut().push(Op::Tone(frequency_hz, duration_ms));
        }

        fn click(&mut self, duration_ms: u32) {
            self.0.borrow_mut().push(Op::Click(duration_ms));
        }
    }

    struct MockLed(Log);

    impl Indicator for MockLed {
        fn show(&mut self, color: LedColor, hold_ms: u32) {
            self.0.borrow_mut().push(Op::Led(color, hold_ms));
        }
    }

    struct MockButton(Cell<bool>);

    impl Button for MockButton {
        fn is_pressed(&self) -> bool {
            self.0.get()
        }
    }

    struct Rig {
        log: Log,
        display: MockDisplay,
        buzzer: MockBuzzer,
        led: MockLed,
    }

    impl Rig {
        fn new() -> Self {
            let log: Log = Rc::new(RefCell::new(Vec::new()));
            Self {
                display: MockDisplay {
                    log: log.clone(),
                    fail_flush: false,
                },
                buzzer: MockBuzzer(log.clone()),
                led: MockLed(log.clone()),
                log,
            }
        }

        fn take(&self) -> Vec<Op> {
            core::mem::take(&mut *self.log.borrow_mut())
        }

        fn press(&mut self, marquee: &mut Marquee, event: Event) -> Transition {
            marquee.handle(event, &mut self.display, &mut self.buzzer, &mut self.led)
        }

        /// One pass of the polling loop over both buttons
        fn scan(
            &mut self,
            marquee: &mut Marquee,
            a: &MockButton,
            b: &MockButton,
        ) -> Vec<Event> {
            ButtonId::ALL
                .into_iter()
                .zip([a, b])
                .filter_map(|(id, button)| {
                    marquee.poll_button(
                        id,
                        button,
                        &mut self.display,
                        &mut self.buzzer,
                        &mut self.led,
                    )
                })
                .map(|t| t.event)
                .collect()
        }
    }

    fn make_marquee(messages: &[&'static str]) -> Marquee {
        let catalog = MessageCatalog::new(messages).unwrap();
        Marquee::new(catalog, &DemoConfig::default()).unwrap()
    }

    fn text(x: i32, y: i32, s: &str) -> Op {
        Op::Text(x, y, s.into())
    }

    #[test]
    fn test_starts_at_first_message_red() {
        let marquee = make_marquee(&["EMBARCA", "SHOW"]);
        assert_eq!(marquee.index(), 0);
        assert_eq!(marquee.message(), "EMBARCA");
        assert_eq!(marquee.color(), LedColor::Red);
    }

    #[test]
    fn test_rejects_overflowing_message() {
        let catalog =
            MessageCatalog::new(&["OK", "ONE TWO THREE FOUR FIVE SIX SEVEN EIGHT NINE TEN"]).unwrap();
        let err = Marquee::new(catalog, &DemoConfig::default()).err();
        assert_eq!(
            err,
            Some(ConfigError::MessageOverflow {
                index: 1,
                needed: 4,
                max: 3
            })
        );
    }

    #[test]
    fn test_rejects_zero_width() {
        let catalog = MessageCatalog::new(&["EMBARCA"]).unwrap();
        let mut config = DemoConfig::default();
        config.layout.max_line_width = 0;
        assert_eq!(
            Marquee::new(catalog, &config).err(),
            Some(ConfigError::InvalidLineWidth)
        );
    }

    #[test]
    fn test_rejects_region_off_panel() {
        let catalog =
            MessageCatalog::new(&["ONE TWO THREE FOUR FIVE SIX SEVEN EIGHT NINE TEN"]).unwrap();
        let mut config = DemoConfig::default();
        config.layout.max_lines = 10;
        config.layout.max_line_width = 30;
        assert_eq!(
            Marquee::new(catalog, &config).err(),
            Some(ConfigError::RegionOutOfBounds)
        );
    }

    #[test]
    fn test_render_stacks_lines_from_top() {
        let marquee = make_marquee(&["BEM VINDO A EMBARCATECH AGORA"]);
        let mut rig = Rig::new();
        marquee.show_current(&mut rig.display).unwrap();
        assert_eq!(
            rig.take(),
            vec![
                Op::Clear,
                text(5, 0, "BEM VINDO A"),
                text(5, 8, "EMBARCATECH"),
                text(5, 16, "AGORA"),
                Op::Flush,
            ]
        );
    }

    #[test]
    fn test_render_out_of_range_blank() {
        let marquee = make_marquee(&["EMBARCA"]);
        let mut rig = Rig::new();
        marquee.render(7, &mut rig.display).unwrap();
        assert_eq!(rig.take(), vec![Op::Clear, Op::Flush]);
    }

    #[test]
    fn test_advance_side_effect_order() {
        let mut marquee = make_marquee(&["EMBARCA", "SHOW"]);
        let mut rig = Rig::new();

        let t = rig.press(&mut marquee, Event::Advance);
        assert_eq!(t.index, 1);
        assert_eq!(t.shown_color, LedColor::Red);
        assert_eq!(t.display, Ok(()));

        assert_eq!(
            rig.take(),
            vec![
                Op::Clear,
                text(5, 0, "SHOW"),
                Op::Flush,
                Op::Click(10),
                Op::Tone(261, 100),
                Op::Led(LedColor::Red, 50),
            ]
        );
        assert_eq!(marquee.color(), LedColor::Green);
    }

    #[test]
    fn test_retreat_wraps_to_last() {
        let mut marquee = make_marquee(&["EMBARCA", "SHOW", "COMPENSA"]);
        let mut rig = Rig::new();
        let t = rig.press(&mut marquee, Event::Retreat);
        assert_eq!(t.index, 2);
        assert_eq!(marquee.message(), "COMPENSA");
    }

    #[test]
    fn test_color_cycles_regardless_of_direction() {
        let mut marquee = make_marquee(&["A", "B", "C", "D"]);
        let mut rig = Rig::new();

        let shown: Vec<LedColor> = [Event::Advance, Event::Retreat, Event::Retreat, Event::Advance]
            .into_iter()
            .map(|e| rig.press(&mut marquee, e).shown_color)
            .collect();

        assert_eq!(
            shown,
            vec![LedColor::Red, LedColor::Green, LedColor::Blue, LedColor::Red]
        );
        assert_eq!(marquee.color(), LedColor::Green);
    }

    #[test]
    fn test_display_failure_keeps_feedback() {
        let mut marquee = make_marquee(&["EMBARCA", "SHOW"]);
        let mut rig = Rig::new();
        rig.display.fail_flush = true;

        let t = rig.press(&mut marquee, Event::Advance);
        assert_eq!(t.display, Err(DisplayError::Communication));
        assert_eq!(t.index, 1);

        let ops = rig.take();
        assert!(ops.contains(&Op::Tone(261, 100)));
        assert!(ops.contains(&Op::Led(LedColor::Red, 50)));
        assert_eq!(marquee.color(), LedColor::Green);
    }

    #[test]
    fn test_poll_idle_buttons_does_nothing() {
        let mut marquee = make_marquee(&["EMBARCA", "SHOW", "COMPENSA"]);
        let mut rig = Rig::new();
        let (a, b) = (MockButton(Cell::new(false)), MockButton(Cell::new(false)));

        assert!(rig.scan(&mut marquee, &a, &b).is_empty());
        assert!(rig.take().is_empty());
        assert_eq!(marquee.index(), 0);
        assert_eq!(marquee.color(), LedColor::Red);
    }

    #[test]
    fn test_poll_reads_b_alone() {
        let mut marquee = make_marquee(&["EMBARCA", "SHOW", "COMPENSA"]);
        let mut rig = Rig::new();
        let (a, b) = (MockButton(Cell::new(false)), MockButton(Cell::new(true)));

        assert_eq!(rig.scan(&mut marquee, &a, &b), vec![Event::Retreat]);
        assert_eq!(marquee.index(), 2);
    }

    #[test]
    fn test_both_held_alternates_each_scan() {
        let mut marquee = make_marquee(&["EMBARCA", "SHOW", "COMPENSA"]);
        let mut rig = Rig::new();
        let (a, b) = (MockButton(Cell::new(true)), MockButton(Cell::new(true)));

        for _ in 0..2 {
            assert_eq!(
                rig.scan(&mut marquee, &a, &b),
                vec![Event::Advance, Event::Retreat]
            );
            assert_eq!(marquee.index(), 0);
        }
        // Four presses of feedback, each a full tone
        let tones = rig.take().iter().filter(|op| **op == Op::Tone(261, 100)).count();
        assert_eq!(tones, 4);
        assert_eq!(marquee.color(), LedColor::Green);
    }

    #[test]
    fn test_poll_accepts_trait_object() {
        let mut marquee = make_marquee(&["EMBARCA", "SHOW"]);
        let mut rig = Rig::new();
        let button: &dyn Button = &MockButton(Cell::new(true));

        let t = marquee
            .poll_button(ButtonId::A, button, &mut rig.display, &mut rig.buzzer, &mut rig.led)
            .unwrap();
        assert_eq!((t.event, t.index), (Event::Advance, 1));
    }

    #[test]
    fn test_full_lap_returns_home() {
        let messages = [
            "EMBARCA", "SHOW", "COMPENSA", "3MIL", "MUITO", "BOM", "HELLO", "WELCOME",
            "AVANCADA", "EFICIENTES", "SUPERIOR", "PARCERIA", "FUTURO", "INOVACAO", "PONTA",
        ];
        let mut marquee = make_marquee(&messages);
        let mut rig = Rig::new();

        for _ in 0..messages.len() {
            rig.press(&mut marquee, Event::Advance);
        }
        assert_eq!(marquee.index(), 0);

        for _ in 0..messages.len() {
            rig.press(&mut marquee, Event::Retreat);
        }
        assert_eq!(marquee.index(), 0);
        // 30 presses, a multiple of three
        assert_eq!(marquee.color(), LedColor::Red);
    }
}
