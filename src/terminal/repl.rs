//! Interactive dashboard loop

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use super::command::{Command, HELP};
use super::view::TerminalView;
use crate::api::DashboardApi;
use crate::dashboard::{DashboardController, UiEvent};
use crate::view::ChartBackend;

/// Read commands line by line until `quit` or end of input
///
/// Operation failures have already been shown by the view; they only end
/// up in the log here.
pub async fn run<A, W, C, R>(
    controller: &DashboardController<A, TerminalView<W>, C>,
    input: R,
) -> std::io::Result<()>
where
    A: DashboardApi,
    W: std::io::Write + Send,
    C: ChartBackend,
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();

    while let Some(line) = lines.next_line().await? {
        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                controller
                    .with_view(|view| view.print(&format!("{}\n", e)))
                    .await;
                continue;
            }
        };

        let event = match command {
            Command::Search(term) => {
                controller.with_view(|view| view.set_search(&term)).await;
                UiEvent::Search
            }
            Command::Set(field, value) => {
                controller
                    .with_view(|view| view.set_input(field, &value))
                    .await;
                continue;
            }
            Command::Apply => UiEvent::ApplyFilters,
            Command::Clear => UiEvent::ClearFilters,
            Command::View(id) => UiEvent::ShowDetail(id),
            Command::Close => UiEvent::CloseDetail,
            Command::Reload => UiEvent::Reload,
            Command::Help => {
                controller.with_view(|view| view.print(HELP)).await;
                continue;
            }
            Command::Quit => break,
        };

        if let Err(e) = controller.dispatch(event).await {
            tracing::debug!(?event, error = %e, "Command failed");
        }
    }

    Ok(())
}
