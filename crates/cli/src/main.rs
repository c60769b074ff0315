// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! # stay-calendar
//!
//! Opens a booking calendar on one month, replays a sequence of clicks and
//! prints the resulting grid and quote.
//!
//! Data comes from a JSON fixture (`--fixture`) or, without one, from the
//! deterministic simulated backend.
//!
//! Before each click the calendar steps month by month to the clicked date,
//! so every month a stay crosses has been loaded when the range completes.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod fixture;
mod render;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{
    Result,
    eyre::{Context, eyre},
};
use fixture::FixtureProvider;
use render::{Report, render_month, render_summary};
use stay_calendar::{
    AvailabilityProvider, CalendarConfig, CalendarEvent, CalendarSession, Command, PricingMode,
    SimulatedProvider, simulated_room_types,
};
use stay_calendar_domain::{BookingPolicy, BookingType, DateKey, RoomType, YearMonth};
use std::path::PathBuf;
use time::OffsetDateTime;
use tracing::level_filters::LevelFilter;
use tracing::{debug, info};
use tracing_log::AsTrace;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(args.log_level().into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    match args.run() {
        Ok(()) => (),
        Err(err) => {
            tracing::error!("{err:?}");
            std::process::exit(1);
        }
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PricingArg {
    /// Do not fetch or show prices
    Disabled,
    /// Nights without a price cost the base price
    Fallback,
    /// Every night must have a price
    Mandatory,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None, styles = clap_cargo::style::CLAP_STYLING)]
struct Args {
    /// Month to open, as YYYY-MM. Defaults to the first click's month, then the current month
    #[arg(long)]
    month: Option<YearMonth>,

    /// Booking type: semester, monthly or short-term
    #[arg(long, default_value = "semester")]
    booking_type: BookingType,

    /// Override the booking type's minimum stay
    #[arg(long)]
    min_nights: Option<u32>,

    /// Override the maximum stay
    #[arg(long)]
    max_nights: Option<u32>,

    /// How prices take part in a booking
    #[arg(long, value_enum, default_value_t = PricingArg::Fallback)]
    pricing: PricingArg,

    /// Price for nights without a stored price (fallback pricing)
    #[arg(long, default_value_t = 0)]
    base_price: u64,

    /// Room type id (single, shared or studio); its price becomes the base price
    #[arg(long)]
    room_type: Option<String>,

    /// JSON file with availability and prices. Without it, data is simulated
    #[arg(long)]
    fixture: Option<PathBuf>,

    /// Treat this date as today and block earlier dates
    #[arg(long, conflicts_with = "block_past")]
    today: Option<DateKey>,

    /// Block dates before today's UTC date
    #[arg(long)]
    block_past: bool,

    /// Date to click, as YYYY-MM-DD. Repeat for each click
    #[arg(long = "click")]
    clicks: Vec<DateKey>,

    /// Date to hover after the clicks
    #[arg(long)]
    hover: Option<DateKey>,

    /// Print a JSON report instead of the text grid
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }

    fn run(self) -> Result<()> {
        match self.fixture.clone() {
            Some(path) => {
                let provider: FixtureProvider = FixtureProvider::load(&path)?;
                self.drive(provider)
            }
            None => self.drive(SimulatedProvider::default()),
        }
    }

    fn today(&self) -> Option<DateKey> {
        self.today.or_else(|| {
            self.block_past
                .then(|| DateKey::new(OffsetDateTime::now_utc().date()))
        })
    }

    fn policy_override(&self) -> Result<Option<BookingPolicy>> {
        if self.min_nights.is_none() && self.max_nights.is_none() {
            return Ok(None);
        }
        let policy: BookingPolicy = BookingPolicy::new(
            self.min_nights
                .unwrap_or_else(|| self.booking_type.min_stay_nights()),
            self.max_nights
                .unwrap_or(BookingPolicy::DEFAULT_MAX_STAY_NIGHTS),
        )?;
        Ok(Some(policy))
    }

    fn pricing(&self) -> PricingMode {
        match self.pricing {
            PricingArg::Disabled => PricingMode::Disabled,
            PricingArg::Fallback => PricingMode::Fallback {
                base_price: self.base_price,
            },
            PricingArg::Mandatory => PricingMode::Mandatory,
        }
    }

    fn room_type(&self) -> Result<Option<RoomType>> {
        let Some(id) = &self.room_type else {
            return Ok(None);
        };
        simulated_room_types()
            .into_iter()
            .find(|room| &room.id == id)
            .map(Some)
            .ok_or_else(|| eyre!("Unknown room type '{id}' (expected single, shared or studio)"))
    }

    fn start_month(&self) -> YearMonth {
        self.month
            .or_else(|| self.clicks.first().map(DateKey::year_month))
            .unwrap_or_else(|| DateKey::new(OffsetDateTime::now_utc().date()).year_month())
    }

    fn config(&self) -> Result<CalendarConfig> {
        Ok(CalendarConfig {
            policy_override: self.policy_override()?,
            pricing: self.pricing(),
            today: self.today(),
        })
    }

    fn drive<P: AvailabilityProvider>(self, provider: P) -> Result<()> {
        let config: CalendarConfig = self.config()?;
        let (mut session, mut events) =
            CalendarSession::open(provider, self.start_month(), self.booking_type, config)
                .wrap_err("Failed to open calendar")?;

        if let Some(room_type) = self.room_type()? {
            events.extend(session.dispatch(Command::ChangeRoomType { room_type })?);
        }

        for date in &self.clicks {
            walk_to(&mut session, date.year_month(), &mut events)?;
            events.extend(session.dispatch(Command::SelectDate { date: *date })?);
        }

        if let Some(date) = self.hover {
            events.extend(session.dispatch(Command::HoverDate { date })?);
        }

        for event in &events {
            debug!(?event, "Calendar event");
        }
        if let Some(quote) = session.completed_range() {
            info!(
                check_in = %quote.check_in,
                check_out = %quote.check_out,
                total_price = quote.total_price,
                "Stay ready for payment"
            );
        }

        let report: Report = Report::new(session.state(), events)?;
        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&report).wrap_err("Failed to encode report")?
            );
        } else {
            print!("{}", render_month(session.state())?);
            print!("{}", render_summary(&report));
        }
        Ok(())
    }
}

/// Steps one month at a time until `target` is on screen.
fn walk_to<P: AvailabilityProvider>(
    session: &mut CalendarSession<P>,
    target: YearMonth,
    events: &mut Vec<CalendarEvent>,
) -> Result<()> {
    while session.state().visible_month != target {
        let delta: i32 = if target > session.state().visible_month {
            1
        } else {
            -1
        };
        events.extend(session.dispatch(Command::NavigateMonth { delta })?);
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_args_build_config() {
        let args: Args = Args::parse_from([
            "stay-calendar",
            "--booking-type",
            "monthly",
            "--max-nights",
            "90",
            "--pricing",
            "mandatory",
            "--today",
            "2024-09-15",
            "--click",
            "2024-09-20",
            "--click",
            "2024-10-25",
        ]);

        let config: CalendarConfig = args.config().unwrap();

        assert_eq!(config.pricing, PricingMode::Mandatory);
        assert_eq!(config.today, Some(DateKey::parse("2024-09-15").unwrap()));
        let policy: BookingPolicy = config.policy_override.unwrap();
        assert_eq!(policy.min_stay_nights(), 30);
        assert_eq!(policy.max_stay_nights(), 90);
        assert_eq!(args.start_month(), YearMonth::from_numbers(2024, 9).unwrap());
        assert_eq!(args.clicks.len(), 2);
    }

    #[test]
    fn test_unknown_room_type_is_an_error() {
        let args: Args = Args::parse_from(["stay-calendar", "--room-type", "penthouse"]);
        assert!(args.room_type().is_err());
    }

    #[test]
    fn test_walk_to_loads_every_month_between() {
        let args: Args = Args::parse_from([
            "stay-calendar",
            "--booking-type",
            "semester",
            "--click",
            "2024-09-02",
            "--click",
            "2024-11-15",
        ]);
        let (mut session, _) = CalendarSession::open(
            SimulatedProvider::default(),
            args.start_month(),
            args.booking_type,
            args.config().unwrap(),
        )
        .unwrap();
        let mut events: Vec<CalendarEvent> = Vec::new();

        for date in &args.clicks {
            walk_to(&mut session, date.year_month(), &mut events).unwrap();
            events.extend(
                session
                    .dispatch(Command::SelectDate { date: *date })
                    .unwrap(),
            );
        }

        assert_eq!(session.state().months.len(), 3);
        let quote = session.completed_range().unwrap();
        assert_eq!(quote.nights, 74);
    }
}
