//! Overlay decoding. Only the two-byte version header has a known layout;
//! the body is left unread.

use log::{info, warn};

use crate::navgrid::cursor::ByteCursor;
use crate::navgrid::format::version::{self, OVERLAY_VERSION};
use crate::navgrid::types::error::Result;
use crate::navgrid::types::kind::NavGridKind;
use crate::navgrid::types::models::{DecodeNotice, DecodeOptions, OverlayHeader};

pub fn parse(cursor: &mut ByteCursor, options: DecodeOptions) -> Result<OverlayHeader> {
    let version = version::read_overlay(cursor)?;

    let mut notices = Vec::with_capacity(2);
    if version != OVERLAY_VERSION {
        version::reject_if_strict(options.strict_version, NavGridKind::Overlay, version)?;
        notices.push(DecodeNotice::UnsupportedVersion(version));
    }

    warn!(
        "Overlay body layout is unknown; {} bytes after the header were not decoded",
        cursor.remaining()
    );
    notices.push(DecodeNotice::BodyNotDecoded);

    info!("Overlay header decoded: version={}", version);
    Ok(OverlayHeader { version, notices })
}
