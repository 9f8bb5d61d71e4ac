use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct QuizLayout {
    pub header_area: Rect,
    pub question_area: Rect,
    pub answer_area: Rect,
    pub help_area: Rect,
}

pub struct MenuLayout {
    pub title_area: Rect,
    pub list_area: Rect,
    pub status_area: Rect,
    pub help_area: Rect,
}

pub fn calculate_quiz_chunks(area: Rect) -> QuizLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Min(8),
            Constraint::Length(3),
        ])
        .split(area);

    QuizLayout {
        header_area: chunks[0],
        question_area: chunks[1],
        answer_area: chunks[2],
        help_area: chunks[3],
    }
}

pub fn calculate_menu_chunks(area: Rect) -> MenuLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(area);

    MenuLayout {
        title_area: chunks[0],
        list_area: chunks[1],
        status_area: chunks[2],
        help_area: chunks[3],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiz_layout_fixed_rows() {
        let layout = calculate_quiz_chunks(Rect::new(0, 0, 100, 50));
        assert_eq!(layout.header_area.height, 3);
        assert_eq!(layout.question_area.height, 5);
        assert_eq!(layout.help_area.height, 3);
        assert!(layout.answer_area.height >= 8);
    }

    #[test]
    fn test_menu_layout_fixed_rows() {
        let layout = calculate_menu_chunks(Rect::new(0, 0, 80, 40));
        assert_eq!(layout.title_area.height, 3);
        assert_eq!(layout.status_area.height, 3);
        assert_eq!(layout.help_area.height, 3);
        assert!(layout.list_area.height > 0);
    }
}
