pub mod fixtures;

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;

use ddlview::app::DdlViewerState;
use ddlview::ui::DdlPane;

pub const TEST_WIDTH: u16 = 60;
pub const TEST_HEIGHT: u16 = 16;

const FIXED_TIME_MS: u128 = 0;

pub fn create_test_terminal() -> Terminal<TestBackend> {
    let backend = TestBackend::new(TEST_WIDTH, TEST_HEIGHT);
    Terminal::new(backend).unwrap()
}

pub fn render_and_get_buffer(
    terminal: &mut Terminal<TestBackend>,
    state: &DdlViewerState,
    scroll_offset: usize,
) -> Buffer {
    terminal
        .draw(|frame| {
            DdlPane::render(
                frame,
                frame.area(),
                state,
                scroll_offset,
                true,
                FIXED_TIME_MS,
            );
        })
        .unwrap();

    terminal.backend().buffer().clone()
}

pub fn render_to_string(
    terminal: &mut Terminal<TestBackend>,
    state: &DdlViewerState,
    scroll_offset: usize,
) -> String {
    let buffer = render_and_get_buffer(terminal, state, scroll_offset);
    buffer_to_string(&buffer)
}

fn buffer_to_string(buffer: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            let cell = buffer.cell((x, y)).unwrap();
            result.push_str(cell.symbol());
        }
        if y < buffer.area.height - 1 {
            result.push('\n');
        }
    }
    result
}
