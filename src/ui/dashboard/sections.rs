use super::*;

impl Dashboard {
    pub(super) fn render_header(frame: &mut Frame, area: Rect, app: &AppState) {
        let name = app.current_user().map(|u| u.name.as_str()).unwrap_or("there");
        let house = app.house_name();

        let mut lines = vec![Line::from(vec![
            Span::styled(format!("Hi, {name}"), Style::default().bold()),
            Span::raw("  "),
            Span::styled(house.to_string(), Style::default().fg(Color::Cyan)),
        ])];

        let pending_today = app.todays_chores().filter(|c| !c.is_done).count();
        lines.push(Line::from(Span::styled(
            format!("{pending_today} chore(s) due today"),
            Style::default().fg(Color::Gray),
        )));

        if let Some(leader) = app.weekly_leader() {
            lines.push(Line::from(vec![
                Span::styled("Weekly leader: ", Style::default().fg(Color::Gray)),
                avatar(leader),
                Span::raw(format!(" {} ", leader.name)),
                Span::styled(
                    format!("{} pts", leader.points),
                    Style::default().fg(Color::Yellow),
                ),
            ]));
        }

        frame.render_widget(
            Paragraph::new(lines).block(Block::default().borders(Borders::BOTTOM)),
            area,
        );
    }

    pub(super) fn render_announcement(frame: &mut Frame, area: Rect) {
        let paragraph = Paragraph::new(ANNOUNCEMENT)
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(Color::White))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Blue))
                    .title(" Announcement "),
            );
        frame.render_widget(paragraph, area);
    }

    pub(super) fn render_members(frame: &mut Frame, area: Rect, app: &AppState) {
        let mut spans = Vec::new();
        for user in app.members() {
            if !spans.is_empty() {
                spans.push(Span::raw("  "));
            }
            spans.push(avatar(user));
            spans.push(Span::raw(format!(" {}", user.name)));
        }

        frame.render_widget(
            Paragraph::new(Line::from(spans))
                .block(Block::default().borders(Borders::ALL).title(" Members ")),
            area,
        );
    }

    pub(super) fn render_completion(frame: &mut Frame, area: Rect, app: &AppState) {
        let total = app.chores().len();
        let done = app.chores().iter().filter(|c| c.is_done).count();
        let ratio = if total == 0 {
            0.0
        } else {
            done as f64 / total as f64
        };

        let gauge = Gauge::default()
            .block(Block::default().borders(Borders::ALL).title(" Progress "))
            .gauge_style(Style::default().fg(Color::Green).bg(Color::DarkGray))
            .ratio(ratio)
            .label(format!("{done}/{total} done"));
        frame.render_widget(gauge, area);
    }

    pub(super) fn render_chores(frame: &mut Frame, area: Rect, state: &mut UiState) {
        let items: Vec<ListItem> = state
            .app
            .chores()
            .iter()
            .map(|chore| ListItem::new(Self::chore_line(&state.app, chore)))
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(" Chores "))
            .highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");

        frame.render_stateful_widget(list, area, &mut state.dashboard.list_state);
    }

    fn chore_line<'a>(app: &AppState, chore: &'a Chore) -> Line<'a> {
        let (marker, title_style) = if chore.is_done {
            (
                Span::styled("✓ ", Style::default().fg(Color::Green)),
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::CROSSED_OUT),
            )
        } else {
            (
                Span::styled("○ ", Style::default().fg(Color::Gray)),
                Style::default().fg(Color::White),
            )
        };

        let mut spans = vec![
            marker,
            Span::styled(chore.title.as_str(), title_style),
            Span::raw("  "),
            Span::styled(chore.due.label(), due_style(chore.due)),
        ];
        if let Some(user) = app.user(chore.assignee) {
            spans.push(Span::raw("  "));
            spans.push(avatar(user));
        }
        Line::from(spans)
    }

    pub(super) fn render_action_button(frame: &mut Frame, area: Rect, action: ActionButton) {
        let span = match action {
            ActionButton::Collapsed => button("+", true),
            ActionButton::Expanded => button("+ New Chore (press N again)", true),
        };
        frame.render_widget(
            Paragraph::new(Line::from(span)).alignment(Alignment::Right),
            area,
        );
    }
}
