//! Horizontal layout for the dock strip.

use crate::models::BBox;
use crate::models::DockEntry;
use crate::models::Handle;
use crate::models::Size;

/// Split the panel's width evenly among the entries, capping each at its
/// desired width, and fill left to right in the given order.
///
/// The gutter is cosmetic dead space carved out of each strip's rendered
/// width; the cursor always advances by the full allotment. Space freed by a
/// capped entry is not handed to later entries, so the total consumed width
/// can come in under the panel width.
pub fn update<H: Handle>(panel: Size, gutter: i32, entries: &mut [&mut DockEntry<H>]) {
    let count = entries.len();
    if count == 0 {
        return;
    }
    let equal_share = panel.w / count as i32;
    let mut x = 0;
    for entry in entries.iter_mut() {
        let allotted = std::cmp::min(equal_share, entry.desired.w);
        entry.geometry = BBox {
            x,
            y: 0,
            width: std::cmp::max(allotted - gutter, 0),
            height: panel.h,
        };
        x += allotted;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MockHandle, WindowHandle};

    const GUTTER: i32 = 4;

    fn entries(desired_widths: &[i32]) -> Vec<DockEntry<MockHandle>> {
        desired_widths
            .iter()
            .enumerate()
            .map(|(i, &w)| {
                let mut entry =
                    DockEntry::new(WindowHandle(i as i32), None, Size::new(w, 256));
                entry.set_visible(true);
                entry
            })
            .collect()
    }

    fn lay_out(panel: Size, entries: &mut [DockEntry<MockHandle>]) {
        let mut refs: Vec<&mut DockEntry<MockHandle>> = entries.iter_mut().collect();
        update(panel, GUTTER, &mut refs);
    }

    #[test]
    fn wide_panels_pack_entries_at_their_desired_width() {
        let mut subject = entries(&[100, 100, 100]);
        lay_out(Size::new(400, 30), &mut subject);
        for (i, entry) in subject.iter().enumerate() {
            assert_eq!(entry.geometry.x, i as i32 * 100);
            assert_eq!(entry.geometry.width, 96);
            assert_eq!(entry.geometry.height, 30);
        }
    }

    #[test]
    fn capped_space_is_not_redistributed() {
        // The first entry caps at 50 of its 150 share; the freed 100 pixels
        // stay unused rather than widening the second entry.
        let mut subject = entries(&[50, 300]);
        lay_out(Size::new(300, 30), &mut subject);
        assert_eq!(subject[0].geometry.width, 46);
        assert_eq!(subject[1].geometry.x, 50);
        assert_eq!(subject[1].geometry.width, 146);
        let consumed = subject[1].geometry.x + subject[1].geometry.width;
        assert!(consumed < 300);
    }

    #[test]
    fn crowded_panels_split_evenly() {
        let mut subject = entries(&[256, 256, 256]);
        lay_out(Size::new(300, 30), &mut subject);
        let positions: Vec<i32> = subject.iter().map(|e| e.geometry.x).collect();
        let widths: Vec<i32> = subject.iter().map(|e| e.geometry.width).collect();
        assert_eq!(positions, vec![0, 100, 200]);
        assert_eq!(widths, vec![96, 96, 96]);
    }

    #[test]
    fn no_entries_is_a_no_op() {
        let mut subject = entries(&[]);
        lay_out(Size::new(300, 30), &mut subject);
    }

    #[test]
    fn zero_width_panels_degrade_to_zero_width_strips() {
        let mut subject = entries(&[256, 256]);
        lay_out(Size::new(0, 30), &mut subject);
        for entry in &subject {
            assert_eq!(entry.geometry.width, 0);
            assert_eq!(entry.geometry.x, 0);
        }
    }

    #[test]
    fn entries_narrower_than_the_gutter_clip_to_zero() {
        let mut subject = entries(&[256]);
        lay_out(Size::new(3, 30), &mut subject);
        assert_eq!(subject[0].geometry.width, 0);
    }
}
