use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width of the packet form column.
pub const FORM_WIDTH: u16 = 34;

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(4);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Split the body into the form column and the telemetry panel.
pub fn body_columns(body: Rect) -> (Rect, Rect) {
    let form_width = FORM_WIDTH.min(body.width / 2);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(form_width), Constraint::Min(0)])
        .split(body);
    (columns[0], columns[1])
}

/// Rectangle of the given size centered in `area`, clamped to fit.
pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_cover_area() {
        let area = Rect::new(0, 0, 100, 30);
        let (header, body, footer) = layout_regions(area);
        assert_eq!(header.height + body.height + footer.height, 30);
        assert_eq!(body.y, header.height);
    }

    #[test]
    fn tiny_area_does_not_underflow() {
        let (header, body, footer) = layout_regions(Rect::new(0, 0, 10, 2));
        assert_eq!(header.height, 2);
        assert_eq!(body.height, 0);
        assert_eq!(footer.height, 0);
    }

    #[test]
    fn centered_rect_is_clamped() {
        let area = Rect::new(0, 0, 20, 10);
        let rect = centered_rect_by_size(area, 50, 4);
        assert_eq!(rect.width, 20);
        assert_eq!(rect.x, 0);
        assert_eq!(rect.y, 3);
    }
}
