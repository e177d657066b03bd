// Modal popups drawn over the create-house and dashboard screens

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::household::{AppState, ChoreId, DueLabel, InviteCode};
use crate::ui::components::{avatar, button, centered_rect, due_style};
use crate::ui::focus::NewChoreFocus;
use crate::ui::state::{CreateHouseForm, NewChoreForm};
use crate::ui::widgets::TextField;

/// Clear a centered area and draw a bordered modal frame, returning its inner area
fn modal(frame: &mut Frame, title: &str, width: u16, height: u16, accent: Color) -> Rect {
    let area = centered_rect(width, height, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent))
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .style(Style::default().bg(Color::Black));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

fn key_hint(key: &'static str, color: Color) -> Span<'static> {
    Span::styled(key, Style::default().fg(color).add_modifier(Modifier::BOLD))
}

fn row(label: &'static str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(label, Style::default().fg(Color::Gray)),
        Span::styled(value, Style::default().fg(Color::White)),
    ])
}

pub fn render_summary(frame: &mut Frame, form: &CreateHouseForm) {
    let inner = modal(frame, "Confirm House", 50, 10, Color::Yellow);
    let name = form.validated_name().unwrap_or_default();

    let lines = vec![
        Line::from(""),
        row("House Name:  ", name),
        row("House Type:  ", form.kind.label().to_string()),
        row("Members:     ", form.members.get().to_string()),
        Line::from(""),
        Line::from(vec![
            key_hint("[Y]", Color::Green),
            Span::raw(" Create   "),
            key_hint("[E]", Color::Yellow),
            Span::raw(" Edit"),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

pub fn render_invite(frame: &mut Frame, form: &CreateHouseForm, code: &InviteCode) {
    let inner = modal(frame, "House Created", 50, 11, Color::Green);

    let copied = if form.copied {
        Span::styled("Copied!", Style::default().fg(Color::Green))
    } else {
        Span::raw("")
    };
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Share this code with your housemates",
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            code.to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(copied),
        Line::from(""),
        Line::from(vec![
            key_hint("[C]", Color::Yellow),
            Span::raw(" Copy   "),
            key_hint("[S]", Color::Yellow),
            Span::raw(" Share   "),
            key_hint("[Enter]", Color::Green),
            Span::raw(" Continue"),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

pub fn render_chore_detail(frame: &mut Frame, app: &AppState, id: ChoreId) {
    let Some(chore) = app.chore(id) else {
        return;
    };
    let inner = modal(frame, "Chore Details", 56, 13, Color::Blue);

    let assignee = app
        .user(chore.assignee)
        .map(|u| vec![avatar(u), Span::raw(" "), Span::raw(u.name.clone())])
        .unwrap_or_else(|| vec![Span::raw("Unassigned")]);
    let status = if chore.is_done {
        Span::styled("Completed", Style::default().fg(Color::Green))
    } else {
        Span::styled("Pending", Style::default().fg(Color::Yellow))
    };

    let mut lines = vec![
        Line::from(Span::styled(
            chore.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    if !chore.description.is_empty() {
        lines.push(Line::from(Span::styled(
            chore.description.clone(),
            Style::default().fg(Color::Gray),
        )));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(
        [vec![Span::styled("Assignee: ", Style::default().fg(Color::Gray))], assignee].concat(),
    ));
    lines.push(Line::from(vec![
        Span::styled("Due:      ", Style::default().fg(Color::Gray)),
        Span::styled(chore.due.label(), due_style(chore.due)),
    ]));
    lines.push(Line::from(vec![
        Span::styled("Status:   ", Style::default().fg(Color::Gray)),
        status,
    ]));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        key_hint("[Space]", Color::Green),
        Span::raw(if chore.is_done {
            " Undo   "
        } else {
            " Mark Done   "
        }),
        key_hint("[Esc]", Color::Red),
        Span::raw(" Close"),
    ]));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

pub fn render_new_chore(frame: &mut Frame, app: &AppState, form: &NewChoreForm) {
    let inner = modal(frame, "New Chore", 60, 12, Color::Cyan);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(1), // Description
            Constraint::Length(1),
            Constraint::Length(1), // Assignee
            Constraint::Length(1), // Due
            Constraint::Length(1),
            Constraint::Length(1), // Submit
            Constraint::Min(0),
        ])
        .split(inner);

    frame.render_widget(
        TextField::new("Title", &form.title)
            .placeholder("What needs doing?")
            .focused(form.focus == NewChoreFocus::Title),
        rows[0],
    );
    frame.render_widget(
        TextField::new("Description", &form.description)
            .placeholder("Optional details")
            .focused(form.focus == NewChoreFocus::Description),
        rows[1],
    );

    let label_style = |focused: bool| {
        if focused {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        }
    };

    let mut assignee = vec![Span::styled(
        "Assignee: ",
        label_style(form.focus == NewChoreFocus::Assignee),
    )];
    match app.members().get(form.assignee) {
        Some(user) => {
            assignee.push(Span::raw("◀ "));
            assignee.push(avatar(user));
            assignee.push(Span::raw(format!(" {} ▶", user.name)));
        }
        None => assignee.push(Span::raw("No members")),
    }
    frame.render_widget(Paragraph::new(Line::from(assignee)), rows[3]);

    let mut due = vec![Span::styled(
        "Due:      ",
        label_style(form.focus == NewChoreFocus::Due),
    )];
    for label in DueLabel::SELECTABLE {
        let style = if label == form.due_label() {
            Style::default().fg(Color::Black).bg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        due.push(Span::styled(format!(" {} ", label.label()), style));
        due.push(Span::raw(" "));
    }
    frame.render_widget(Paragraph::new(Line::from(due)), rows[4]);

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            button("Add Chore", form.can_submit()),
            Span::raw("  "),
            key_hint("[Esc]", Color::Red),
            Span::raw(" Cancel"),
        ]))
        .alignment(Alignment::Center),
        rows[6],
    );
}

pub fn render_logout(frame: &mut Frame, app: &AppState) {
    let inner = modal(frame, "Logout", 50, 7, Color::Yellow);

    let who = app
        .current_user()
        .map(|u| format!("Sign out of {}?", u.name))
        .unwrap_or_else(|| "Sign out?".to_string());
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(who, Style::default().fg(Color::White))),
        Line::from(Span::styled(
            "You will return to the welcome pages.",
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(vec![
            key_hint("[Y]", Color::Green),
            Span::raw(" Logout   "),
            key_hint("[N]", Color::Red),
            Span::raw(" Cancel"),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}
