use crate::models::roll_types::{FrameRecord, RollMetadata};
use crate::services::gps;
use chrono::Duration;

/// Tags shared by every image on a roll, derived once from the top-level
/// camera, ISO, and film-stock entries.
#[derive(Debug, Clone, Default)]
pub struct CommonFields {
    tags: Vec<(String, String)>,
    comment_base: String,
}

impl CommonFields {
    pub fn from_roll(roll: &RollMetadata) -> Self {
        let mut tags = Vec::new();

        if let Some(camera) = &roll.camera {
            if let Some(make) = &camera.make {
                tags.push(("Make".to_string(), make.clone()));
            }
            if let Some(model) = &camera.model {
                tags.push(("Model".to_string(), model.clone()));
            }
            if let Some(serial) = &camera.serial_number {
                tags.push(("SerialNumber".to_string(), serial.clone()));
            }
        }
        if let Some(iso) = &roll.iso {
            tags.push(("ISO".to_string(), iso.to_string()));
        }

        // There are no standard exif tags for film stock, so it goes into the
        // image comment instead.
        let comment_base = match &roll.film_stock {
            Some(stock) => match (&stock.make, &stock.model) {
                (Some(make), Some(model)) => format!("{} {}", make, model),
                (Some(make), None) => make.clone(),
                (None, Some(model)) => model.clone(),
                (None, None) => String::new(),
            },
            None => String::new(),
        };

        CommonFields { tags, comment_base }
    }
}

/// Derive the full ordered tag list for one image.
///
/// Absent optional fields simply omit their tags; that is normal for sparse
/// notes, not an error.
pub fn build_tags(common: &CommonFields, record: &FrameRecord, offset: i64) -> Vec<(String, String)> {
    let mut tags = common.tags.clone();

    if let Some(lens) = &record.lens {
        if let Some(make) = &lens.make {
            tags.push(("LensMake".to_string(), make.clone()));
        }
        if let Some(model) = &lens.model {
            tags.push(("LensModel".to_string(), model.clone()));
        }
        if let (Some(make), Some(model)) = (&lens.make, &lens.model) {
            tags.push(("Lens".to_string(), format!("{} {}", make, model)));
        }
        if let Some(serial) = &lens.serial_number {
            tags.push(("LensSerialNumber".to_string(), serial.clone()));
        }
    }

    // A carried-forward image gets the fallback record's timestamp nudged one
    // minute per skipped frame, keeping the roll in capture order.
    let stamp = (record.date + Duration::minutes(offset))
        .format("%Y-%m-%d %H:%M")
        .to_string();
    tags.push(("DateTime".to_string(), stamp.clone()));
    tags.push(("DateTimeOriginal".to_string(), stamp));

    if let Some(shutter) = &record.shutter {
        let value = shutter.replace('"', "");
        tags.push(("ShutterSpeedValue".to_string(), value.clone()));
        tags.push(("ExposureTime".to_string(), value));
    }

    if let Some(aperture) = &record.aperture {
        let value = aperture.to_string();
        tags.push(("ApertureValue".to_string(), value.clone()));
        tags.push(("FNumber".to_string(), value));
    }

    if let Some(focal_length) = &record.focal_length {
        tags.push(("FocalLength".to_string(), focal_length.to_string()));
    }

    if let Some(location) = &record.location {
        if let (Some(latitude), Some(longitude)) = (location.latitude, location.longitude) {
            let (lat_dms, north) = gps::to_dms(latitude);
            let (lon_dms, east) = gps::to_dms(longitude);
            tags.push(("GPSLatitude".to_string(), lat_dms));
            tags.push(("GPSLatitudeRef".to_string(), if north { "N" } else { "S" }.to_string()));
            tags.push(("GPSLongitude".to_string(), lon_dms));
            tags.push(("GPSLongitudeRef".to_string(), if east { "E" } else { "W" }.to_string()));
        }
    }

    // Notes are frame-specific; a carried-forward image must not repeat them.
    let mut comment = common.comment_base.clone();
    if offset == 0 {
        if let Some(note) = &record.note {
            comment.push_str(", ");
            comment.push_str(note);
        }
    }
    if !comment.is_empty() {
        tags.push(("UserComment".to_string(), comment.clone()));
        tags.push(("ImageDescription".to_string(), comment));
    }

    tags
}
