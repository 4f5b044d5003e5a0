use std::io::{BufRead, Write};

/// Print a prompt and read one line from stdin.
///
/// Returns `None` at end of input (Ctrl-D or closed stdin).
pub fn prompt_line(prompt: &str) -> anyhow::Result<Option<String>> {
    print!("{prompt}");
    std::io::stdout().flush()?;

    let mut line = String::new();
    let read = std::io::stdin().lock().read_line(&mut line)?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Prompt until a non-empty value arrives; error at end of input.
pub fn prompt_required(name: &str) -> anyhow::Result<String> {
    loop {
        let Some(line) = prompt_line(&format!("{name}: "))? else {
            anyhow::bail!("unexpected end of input while reading {name}");
        };
        let value = line.trim();
        if !value.is_empty() {
            return Ok(value.to_string());
        }
    }
}
