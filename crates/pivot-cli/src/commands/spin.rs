//! Spin command - replay swipes through a preview session

use crate::SpinArgs;
use anyhow::{Result, anyhow};
use pivot_core::{BitDepth, Bitmap, ColorSpace};
use pivot_ops::{OrientationCycle, PreviewSession, SessionEvent, Strategy, Swipe};
use serde_json::json;
use tracing::{debug, trace};

pub fn run(args: SpinArgs, verbose: u8) -> Result<()> {
    trace!(swipes = %args.swipes, "spin::run");

    let swipes = parse_swipes(&args.swipes)?;
    let from = super::parse_orientation(&args.from)?;
    let strategy = if args.eager {
        Strategy::Eager
    } else {
        Strategy::TagOnly
    };

    let placeholder = Bitmap::new(args.width, args.height, BitDepth::U8, ColorSpace::Luma)?;
    let cycle = OrientationCycle::new(placeholder, from, strategy)?;
    let mut session = PreviewSession::new(args.session.clone(), cycle);

    for line in replay(&mut session, &swipes, args.json)? {
        println!("{line}");
    }

    let cycle = session.cycle();
    debug!(
        session = ?session.id(),
        orientation = %cycle.orientation(),
        strategy = ?cycle.strategy(),
        "Final state"
    );

    if verbose > 0 && !args.json {
        println!("{}", summary(&session, args.width, args.height));
    }

    Ok(())
}

/// One-line description of where the session ended up.
fn summary(session: &PreviewSession, width: u32, height: u32) -> String {
    let cycle = session.cycle();
    let (w, h) = cycle.orientation().display_dimensions(width, height);
    let strategy = match cycle.strategy() {
        Strategy::TagOnly => "tag-only",
        Strategy::Eager => "eager",
    };
    let mut line = format!("final: {} ({w}x{h}, {strategy})", cycle.orientation());
    if let Some(id) = session.id() {
        line.push_str(&format!(" [{id}]"));
    }
    if session.is_dismissed() {
        line.push_str(" dismissed");
    }
    line
}

/// Parse a swipe string such as `RRLD`. Whitespace is ignored.
fn parse_swipes(s: &str) -> Result<Vec<Swipe>> {
    s.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| Swipe::from_code(c).ok_or_else(|| anyhow!("Unknown swipe code: {}", c)))
        .collect()
}

/// Feed swipes to the session and format one line per event.
fn replay(session: &mut PreviewSession, swipes: &[Swipe], as_json: bool) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    for &swipe in swipes {
        let Some(event) = session.handle_swipe(swipe)? else {
            continue;
        };
        let line = match (event, as_json) {
            (SessionEvent::Rotated { change, degrees }, true) => json!({
                "event": "rotated",
                "degrees": degrees,
                "change": change,
            })
            .to_string(),
            (SessionEvent::Rotated { change, degrees }, false) => format!(
                "rotated {:+} -> {}{}",
                degrees,
                change.orientation,
                change
                    .session_id
                    .map(|id| format!(" [{id}]"))
                    .unwrap_or_default()
            ),
            (SessionEvent::Dismissed, true) => json!({ "event": "dismissed" }).to_string(),
            (SessionEvent::Dismissed, false) => "dismissed".to_string(),
        };
        lines.push(line);
    }
    Ok(lines)
}
