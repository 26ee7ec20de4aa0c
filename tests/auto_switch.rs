mod tests {
    use auto_switch_led_mode::{
        AutoSwitchConfig, AutoSwitchLedMode, CycleClock, DEFAULT_TIMEOUT, EventHandlerResult,
        Key, KeyAddr, KeyEvent, KeyState, LedEffect, Plugin, SwitchState,
    };
    use embassy_time::{Duration, Instant};

    #[derive(Debug, Default)]
    struct CountingEffect {
        activations: usize,
    }

    impl LedEffect for CountingEffect {
        fn activate(&mut self) {
            self.activations += 1;
        }
    }

    type TestPlugin<'a> = AutoSwitchLedMode<&'a CycleClock, CountingEffect, CountingEffect>;

    fn plugin(clock: &CycleClock) -> TestPlugin<'_> {
        AutoSwitchLedMode::new(
            clock,
            CountingEffect::default(),
            CountingEffect::default(),
            &AutoSwitchConfig::default(),
        )
    }

    fn key_down(key: Key) -> KeyEvent {
        KeyEvent::new(KeyAddr::new(0, 0), KeyState::PRESSED, key)
    }

    fn send(plugin: &mut TestPlugin<'_>, clock: &CycleClock, at_ms: u64, mut event: KeyEvent) {
        clock.begin_cycle(Instant::from_millis(at_ms));
        assert_eq!(plugin.on_key_event(&mut event), EventHandlerResult::Ok);
    }

    fn tick(plugin: &mut TestPlugin<'_>, clock: &CycleClock, at_ms: u64) {
        clock.begin_cycle(Instant::from_millis(at_ms));
        assert_eq!(plugin.after_each_cycle(), EventHandlerResult::Ok);
    }

    #[test]
    fn test_starts_idle() {
        let clock = CycleClock::new();
        let mut plugin = plugin(&clock);
        assert_eq!(plugin.state(), SwitchState::Idle);
        assert_eq!(plugin.timeout(), DEFAULT_TIMEOUT);

        tick(&mut plugin, &clock, 5000);
        assert_eq!(plugin.state(), SwitchState::Idle);
        assert_eq!(plugin.colormap().activations, 0);
        assert_eq!(plugin.stalker().activations, 0);
    }

    #[test]
    fn test_typing_activates_stalker() {
        let clock = CycleClock::new();
        let mut plugin = plugin(&clock);

        send(&mut plugin, &clock, 100, key_down(Key::Keyboard(0x04)));
        assert_eq!(plugin.state(), SwitchState::Active);
        assert!(plugin.is_timer_running());
        assert_eq!(plugin.start_time(), Instant::from_millis(100));
        assert_eq!(plugin.stalker().activations, 1);
        assert_eq!(plugin.colormap().activations, 0);
    }

    #[test]
    fn test_typing_while_active_does_not_reactivate_stalker() {
        let clock = CycleClock::new();
        let mut plugin = plugin(&clock);

        send(&mut plugin, &clock, 0, key_down(Key::Keyboard(0x04)));
        send(&mut plugin, &clock, 10, key_down(Key::Keyboard(0x05)));
        assert_eq!(plugin.stalker().activations, 1);
        assert_eq!(plugin.start_time(), Instant::from_millis(10));
    }

    #[test]
    fn test_layer_key_while_active_activates_colormap() {
        let clock = CycleClock::new();
        let mut plugin = plugin(&clock);

        send(&mut plugin, &clock, 0, key_down(Key::Keyboard(0x04)));
        send(&mut plugin, &clock, 50, key_down(Key::layer_shift(1)));
        assert_eq!(plugin.colormap().activations, 1);
        assert_eq!(plugin.state(), SwitchState::Active);

        send(&mut plugin, &clock, 60, key_down(Key::layer_shift(1)));
        send(&mut plugin, &clock, 70, key_down(Key::layer_shift(2)));
        assert_eq!(plugin.colormap().activations, 3);
        assert_eq!(plugin.stalker().activations, 1);
        assert!(plugin.is_timer_running());
    }

    #[test]
    fn test_layer_key_while_idle_does_nothing() {
        let clock = CycleClock::new();
        let mut plugin = plugin(&clock);

        send(&mut plugin, &clock, 0, key_down(Key::layer_shift(1)));
        assert_eq!(plugin.state(), SwitchState::Idle);
        assert_eq!(plugin.colormap().activations, 0);
        assert_eq!(plugin.stalker().activations, 0);
    }

    #[test]
    fn test_timeout_restores_colormap() {
        let clock = CycleClock::new();
        let mut plugin = plugin(&clock);

        send(&mut plugin, &clock, 1000, key_down(Key::Keyboard(0x04)));

        tick(&mut plugin, &clock, 2999);
        assert_eq!(plugin.state(), SwitchState::Active);
        assert_eq!(plugin.colormap().activations, 0);

        tick(&mut plugin, &clock, 3000);
        assert_eq!(plugin.state(), SwitchState::Idle);
        assert_eq!(plugin.colormap().activations, 1);

        // Already idle, no further activations
        tick(&mut plugin, &clock, 9000);
        assert_eq!(plugin.colormap().activations, 1);
    }

    #[test]
    fn test_any_key_event_restarts_timeout() {
        let clock = CycleClock::new();
        let mut plugin = plugin(&clock);

        send(&mut plugin, &clock, 0, key_down(Key::Keyboard(0x04)));
        let release = KeyEvent::new(KeyAddr::new(0, 0), KeyState::RELEASED, Key::Keyboard(0x04));
        send(&mut plugin, &clock, 1500, release);

        tick(&mut plugin, &clock, 2000);
        assert_eq!(plugin.state(), SwitchState::Active);

        tick(&mut plugin, &clock, 3500);
        assert_eq!(plugin.state(), SwitchState::Idle);
        assert_eq!(plugin.colormap().activations, 1);
    }

    #[test]
    fn test_held_key_is_not_a_key_down() {
        let clock = CycleClock::new();
        let mut plugin = plugin(&clock);

        let held = KeyEvent::new(KeyAddr::new(1, 2), KeyState::HELD, Key::Keyboard(0x04));
        send(&mut plugin, &clock, 0, held);
        assert_eq!(plugin.state(), SwitchState::Idle);
        assert_eq!(plugin.stalker().activations, 0);
    }

    #[test]
    fn test_typing_again_after_timeout() {
        let clock = CycleClock::new();
        let mut plugin = plugin(&clock);

        send(&mut plugin, &clock, 0, key_down(Key::Keyboard(0x04)));
        tick(&mut plugin, &clock, 2000);
        send(&mut plugin, &clock, 2100, key_down(Key::Keyboard(0x05)));

        assert_eq!(plugin.state(), SwitchState::Active);
        assert_eq!(plugin.stalker().activations, 2);
        assert_eq!(plugin.colormap().activations, 1);
    }

    #[test]
    fn test_custom_timeout() {
        let clock = CycleClock::new();
        let mut plugin = AutoSwitchLedMode::new(
            &clock,
            CountingEffect::default(),
            CountingEffect::default(),
            &AutoSwitchConfig::new(Duration::from_millis(500)),
        );

        clock.begin_cycle(Instant::from_millis(0));
        let mut event = key_down(Key::Keyboard(0x04));
        plugin.on_key_event(&mut event);

        clock.begin_cycle(Instant::from_millis(499));
        plugin.after_each_cycle();
        assert!(plugin.is_timer_running());

        clock.begin_cycle(Instant::from_millis(500));
        plugin.after_each_cycle();
        assert!(!plugin.is_timer_running());
    }

    #[test]
    fn test_event_is_not_modified() {
        let clock = CycleClock::new();
        let mut plugin = plugin(&clock);

        let original = key_down(Key::Keyboard(0x04));
        let mut event = original;
        plugin.on_key_event(&mut event);
        assert_eq!(event, original);
    }
}
