#![no_std]
#![no_main]

mod peripherals;
mod system;

// Panic handler and debugging
use defmt::unwrap;

use defmt_rtt as _;
use panic_probe as _;

// Device
use embassy_executor::Spawner;
use embassy_nrf::{
    bind_interrupts,
    gpio::{Input, Level, Output, OutputDrive, Pull},
    peripherals::SPI2,
    saadc::{self, ChannelConfig, Resolution, Saadc},
    spim,
};
use embassy_sync::{blocking_mutex::raw::ThreadModeRawMutex, channel::Channel, signal::Signal};
use embassy_time::{Duration, Timer};
use nrf_softdevice::Softdevice;
use static_cell::StaticCell;

bind_interrupts!(struct Irqs {
    SAADC => saadc::InterruptHandler;
    SPIM2_SPIS2_SPI2 => spim::InterruptHandler<SPI2>;
});

// Crate
use peripherals::{
    backlight::Backlight,
    battery::Battery,
    display::Display,
    vibrator::{Pattern, Vibrator},
};
use pinetime_watchface::{config, EventHandler, WatchEvent, WatchFace, Watchface};
use system::{
    bluetooth::{self, Server},
    host::PineTimeHost,
    time::{TimeManager, TimeReference},
};

// Include current UTC epoch at compile time
include!(concat!(env!("OUT_DIR"), "/utc.rs"));

// Communication channels
static EVENTS: Channel<ThreadModeRawMutex, WatchEvent, 8> = Channel::new();
pub(crate) static HAPTICS: Signal<ThreadModeRawMutex, Pattern> = Signal::new();

static SERVER: StaticCell<Server> = StaticCell::new();

#[embassy_executor::task]
async fn softdevice_task(sd: &'static Softdevice) -> ! {
    sd.run().await
}

/// Advertise, then report connection changes.
#[embassy_executor::task]
async fn connection(sd: &'static Softdevice, server: &'static Server) {
    loop {
        let conn = match bluetooth::advertise(sd).await {
            Ok(conn) => conn,
            Err(e) => {
                defmt::warn!("Advertising failed: {}", defmt::Debug2Format(&e));
                Timer::after(Duration::from_secs(1)).await;
                continue;
            }
        };
        defmt::info!("Connected");
        EVENTS.send(WatchEvent::ConnectionChanged(true)).await;

        let reason = bluetooth::serve(&conn, server).await;
        defmt::info!("Disconnected: {}", defmt::Debug2Format(&reason));
        EVENTS.send(WatchEvent::ConnectionChanged(false)).await;
    }
}

/// Sample the battery and report changes.
#[embassy_executor::task]
async fn battery_monitor(mut battery: Battery, server: &'static Server) {
    loop {
        Timer::after(Duration::from_secs(config::BATTERY_POLL_SECS)).await;

        match battery.update().await {
            Ok(Some(state)) => {
                defmt::info!(
                    "Battery status: {}% ({})",
                    state.charge_percent,
                    if state.is_charging {
                        "charging"
                    } else {
                        "discharging"
                    }
                );
                server.set_battery_level(state.charge_percent);
                EVENTS.send(WatchEvent::BatteryChanged(state)).await;
            }
            Ok(None) => {}
            Err(e) => defmt::warn!("Battery sample failed: {}", e),
        }
    }
}

/// Emit a tick at every minute boundary.
#[embassy_executor::task]
async fn minute_ticker(clock: TimeManager) {
    loop {
        Timer::after(clock.until_next_minute()).await;
        EVENTS.send(WatchEvent::MinuteTick(clock.get_time())).await;
    }
}

/// Run haptic patterns requested by the host.
#[embassy_executor::task]
async fn haptics(mut vibrator: Vibrator) {
    loop {
        let pattern = HAPTICS.wait().await;
        vibrator.play(pattern).await;
    }
}

/// Own the watchface and dispatch events to it one at a time.
#[embassy_executor::task]
async fn ui(mut display: Display<SPI2>, mut host: PineTimeHost, backlight: Backlight) {
    defmt::info!("Backlight at level {}", backlight.level());
    let mut face = Watchface::new();
    face.load(display.bounds(), &mut host);

    loop {
        if let Err(e) = face.render(display.lcd()) {
            defmt::warn!("Display refresh failed: {}", defmt::Debug2Format(&e));
        }

        let event = EVENTS.receive().await;
        host.observe(&event);
        face.handle(event, &mut host);
    }
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let mut p = embassy_nrf::init(system::config::nrf_config());
    defmt::info!("Initializing");

    // Initialize SAADC
    let mut saadc_config = saadc::Config::default();
    // Set resolution to 12bit, necessary for correct battery status calculation
    saadc_config.resolution = Resolution::_12BIT;
    // Pin P0.31: Voltage level
    let channel_config = ChannelConfig::single_ended(&mut p.P0_31);
    let saadc = Saadc::new(p.SAADC, Irqs, saadc_config, [channel_config]);
    saadc.calibrate().await;

    // Initialize battery
    let battery = unwrap!(
        Battery::init(
            saadc,
            Input::new(p.P0_12, Pull::None),
            Input::new(p.P0_19, Pull::None),
        )
        .await
    );

    // Initialize vibration motor, off while high
    let vibrator = Vibrator::init(Output::new(p.P0_16, Level::High, OutputDrive::Standard));

    // Initialize backlight
    let backlight = unwrap!(Backlight::init(
        Output::new(p.P0_14, Level::High, OutputDrive::Standard),
        Output::new(p.P0_22, Level::High, OutputDrive::Standard),
        Output::new(p.P0_23, Level::High, OutputDrive::Standard),
        config::BACKLIGHT_LEVEL,
    ));

    // Initialize SPI
    let mut spim_config = spim::Config::default();
    // Use SPI at 8MHz (the fastest clock available on the nRF52832),
    // otherwise refreshing will be super slow.
    spim_config.frequency = spim::Frequency::M8;
    // SPI must be used in mode 3. Mode 0 (the default) won't work.
    spim_config.mode = spim::MODE_3;

    let spim = spim::Spim::new(p.SPI2, Irqs, p.P0_02, p.P0_04, p.P0_03, spim_config);

    // Initialize LCD
    let display = unwrap!(Display::init(
        spim,
        Output::new(p.P0_25, Level::Low, OutputDrive::Standard),
        Output::new(p.P0_18, Level::Low, OutputDrive::Standard),
        Output::new(p.P0_26, Level::Low, OutputDrive::Standard),
    ));

    // Initialize Bluetooth
    let sd = Softdevice::enable(&bluetooth::softdevice_config());
    let server = SERVER.init(unwrap!(Server::new(sd)));
    let sd: &'static Softdevice = sd;
    server.set_battery_level(battery.state().charge_percent);

    // Initialize clock
    let reference = unwrap!(TimeReference::from_unix(UTC_EPOCH, config::UTC_OFFSET_SECS));
    let clock = TimeManager::init(reference);

    let host = PineTimeHost::new(clock, battery.state());

    defmt::info!("Initialization finished");

    // Schedule tasks
    unwrap!(spawner.spawn(softdevice_task(sd)));
    unwrap!(spawner.spawn(connection(sd, server)));
    unwrap!(spawner.spawn(battery_monitor(battery, server)));
    unwrap!(spawner.spawn(minute_ticker(clock)));
    unwrap!(spawner.spawn(haptics(vibrator)));
    unwrap!(spawner.spawn(ui(display, host, backlight)));
}
