mod render_state;
