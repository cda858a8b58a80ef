use std::path::Path;

use super::display_name;

/// Conventional URL where a mini app's own dev server listens
const DEV_SERVER_URL: &str = "http://localhost:3000";

/// Render the placeholder document for a framework-based entry that has no
/// static entry file yet.
///
/// Pure string templating: the output depends on the entry name alone, so
/// overlapping scans that both write the same placeholder produce
/// byte-identical files.
pub fn render(app_name: &str) -> String {
    let title = display_name(app_name);
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
        body {{
            margin: 0;
            display: flex;
            justify-content: center;
            align-items: center;
            min-height: 100vh;
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            background: #f5f5f5;
        }}
        .panel {{
            max-width: 480px;
            padding: 32px;
            text-align: center;
        }}
        h2 {{
            color: #333;
            margin-bottom: 16px;
        }}
        p {{
            color: #666;
            line-height: 1.5;
        }}
        pre {{
            background: #eaeaea;
            border-radius: 6px;
            padding: 16px;
            text-align: left;
            font-size: 14px;
        }}
        button {{
            background: #0070f3;
            color: white;
            border: none;
            padding: 12px 24px;
            border-radius: 6px;
            cursor: pointer;
            margin-top: 24px;
        }}
    </style>
</head>
<body>
    <div class="panel">
        <h2>{title}</h2>
        <p>
            This app is framework-based and has no static build yet.
            To run it, start its own development server:
        </p>
        <pre>cd public/miniapps/{app_name}
npm install
npm run dev</pre>
        <p>The dev server will listen on <a href="{DEV_SERVER_URL}">{DEV_SERVER_URL}</a>.</p>
        <button onclick="window.open('{DEV_SERVER_URL}', '_blank')">Open in New Tab</button>
    </div>
</body>
</html>
"#
    )
}

/// Write the placeholder as the entry's index.html
pub fn write(entry_dir: &Path, app_name: &str) -> std::io::Result<()> {
    let index_path = entry_dir.join("index.html");
    std::fs::write(&index_path, render(app_name))?;
    log::info!("Generated placeholder entry file at {:?}", index_path);
    Ok(())
}
