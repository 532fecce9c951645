use crate::error::AppError;
use crate::models::fs_types::ImageFile;
use crate::models::roll_types::FrameRecord;
use std::collections::BTreeMap;

/// The frame record chosen for one image, and how far the image's number sits
/// from the record's own count. Offset zero means an exact match.
#[derive(Debug, Clone)]
pub struct EffectiveAssignment {
    pub image: ImageFile,
    pub record: FrameRecord,
    pub offset: i64,
}

/// Matches scans to frame notes.
///
/// The count → record index is built once up front; resolution walks the
/// images in ascending frame-number order, carrying the most recent exact
/// match forward for images that have no note of their own.
pub struct FrameResolver {
    frame_by_count: BTreeMap<i64, FrameRecord>,
    last_match: Option<FrameRecord>,
}

impl FrameResolver {
    /// A duplicate count overwrites the earlier entry (last one wins).
    pub fn new(frames: &[FrameRecord]) -> Self {
        let mut frame_by_count = BTreeMap::new();
        for frame in frames {
            frame_by_count.insert(frame.count, frame.clone());
        }
        FrameResolver {
            frame_by_count,
            last_match: None,
        }
    }

    /// Resolve one image to the record supplying its metadata.
    ///
    /// An exact match also refreshes the carry-forward record: a clone with
    /// shutter and aperture cleared, since those are exposure-specific and
    /// must not leak into frames the photographer never logged.
    pub fn resolve(&mut self, image: &ImageFile) -> Result<EffectiveAssignment, AppError> {
        let record = match self.frame_by_count.get(&image.number) {
            Some(record) => {
                let mut fallback = record.clone();
                fallback.shutter = None;
                fallback.aperture = None;
                self.last_match = Some(fallback);
                record.clone()
            }
            None => match &self.last_match {
                Some(fallback) => fallback.clone(),
                None => {
                    return Err(AppError::UnresolvedFrame {
                        image: image
                            .path
                            .file_name()
                            .map(|name| name.to_string_lossy().into_owned())
                            .unwrap_or_else(|| image.number.to_string()),
                    })
                }
            },
        };

        let offset = image.number - record.count;
        Ok(EffectiveAssignment {
            image: image.clone(),
            record,
            offset,
        })
    }

    /// Resolve a whole sorted image list, failing on the first unresolved one.
    pub fn resolve_all(&mut self, images: &[ImageFile]) -> Result<Vec<EffectiveAssignment>, AppError> {
        images.iter().map(|image| self.resolve(image)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::roll_types::Scalar;
    use chrono::NaiveDate;
    use std::path::PathBuf;

    fn frame(count: i64) -> FrameRecord {
        FrameRecord {
            count,
            date: NaiveDate::from_ymd_opt(2020, 1, 1)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap(),
            lens: None,
            shutter: Some("1/250".to_string()),
            aperture: Some(Scalar::Text("5.6".to_string())),
            focal_length: None,
            location: None,
            note: None,
        }
    }

    fn image(number: i64) -> ImageFile {
        ImageFile {
            number,
            path: PathBuf::from(format!("/scans/r001_{:02}.tif", number)),
        }
    }

    #[test]
    fn exact_matches_have_zero_offset() {
        let mut resolver = FrameResolver::new(&[frame(1), frame(2), frame(3)]);
        let assignments = resolver.resolve_all(&[image(1), image(2), image(3)]).unwrap();

        for assignment in &assignments {
            assert_eq!(assignment.offset, 0);
            assert_eq!(assignment.record.count, assignment.image.number);
            assert!(assignment.record.shutter.is_some());
        }
    }

    #[test]
    fn carried_forward_record_loses_shutter_and_aperture() {
        let mut resolver = FrameResolver::new(&[frame(5)]);
        let assignments = resolver.resolve_all(&[image(5), image(6), image(8)]).unwrap();

        assert_eq!(assignments[0].offset, 0);
        assert!(assignments[0].record.shutter.is_some());

        assert_eq!(assignments[1].offset, 1);
        assert!(assignments[1].record.shutter.is_none());
        assert!(assignments[1].record.aperture.is_none());

        assert_eq!(assignments[2].offset, 3);
        assert_eq!(assignments[2].record.count, 5);
    }

    #[test]
    fn unresolved_first_image_fails() {
        let mut resolver = FrameResolver::new(&[frame(5)]);
        let err = resolver.resolve(&image(3)).unwrap_err();
        assert!(matches!(err, AppError::UnresolvedFrame { .. }));
    }

    #[test]
    fn duplicate_counts_resolve_to_last_entry() {
        let mut first = frame(2);
        first.note = Some("first".to_string());
        let mut second = frame(2);
        second.note = Some("second".to_string());

        let mut resolver = FrameResolver::new(&[first, second]);
        let assignment = resolver.resolve(&image(2)).unwrap();
        assert_eq!(assignment.record.note.as_deref(), Some("second"));
    }

    #[test]
    fn fallback_clone_leaves_indexed_record_intact() {
        let mut resolver = FrameResolver::new(&[frame(1)]);
        resolver.resolve(&image(1)).unwrap();
        resolver.resolve(&image(2)).unwrap();

        // Looking the exact frame up again still yields its shutter/aperture.
        let again = resolver.resolve(&image(1)).unwrap();
        assert!(again.record.shutter.is_some());
        assert!(again.record.aperture.is_some());
    }
}
