use crate::model::DisplayState;

/// The page region a lookup draws into. It always receives the whole state.
pub trait RenderSurface: Send {
    fn render(&mut self, state: &DisplayState);
}

/// Text panel for a state, or `None` when nothing is visible.
pub fn render_text(state: &DisplayState) -> Option<String> {
    match state {
        DisplayState::Hidden => None,
        DisplayState::Showing(view) => Some(format!(
            "{city}\n\
             {temp}  {description}\n\
             Humidity: {humidity}\n\
             Wind: {wind}\n\
             Icon: {src} ({alt})",
            city = view.city_name,
            temp = view.temperature,
            description = view.description,
            humidity = view.humidity,
            wind = view.wind_speed,
            src = view.icon.src,
            alt = view.icon.alt,
        )),
        DisplayState::ShowingError(message) => Some(format!("Error: {message}")),
    }
}
