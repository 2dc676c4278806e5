//! Server-rendered HTML for the admin dashboard.

pub mod dashboard;
pub mod layout;

/// Escape text for interpolation into HTML element content or quoted attributes.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Format an integer with comma thousands separators: `2345` -> `2,345`.
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Wrap `body` in the full HTML document with the stylesheet and toggle script.
pub fn document(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<meta name="description" content="{description}">
<title>{title}</title>
<style>{STYLES}</style>
</head>
<body class="antialiased">
{body}
<script>{SCRIPT}</script>
</body>
</html>
"#,
        description = escape(DESCRIPTION),
        title = escape(title),
    )
}

const DESCRIPTION: &str = "Admin panel dashboard with statistics and recent orders";

const STYLES: &str = r#"
*{box-sizing:border-box}
body{margin:0;font-family:-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;background:#f9fafb;color:#111827}
a{color:inherit;text-decoration:none}
.overlay{display:none;position:fixed;inset:0;z-index:20;background:rgba(0,0,0,.5)}
.overlay.open{display:block}
.sidebar{position:fixed;left:0;top:0;z-index:30;height:100vh;width:16rem;display:flex;flex-direction:column;color:#fff;background:linear-gradient(to bottom,#312e81,#581c87);transform:translateX(-100%);transition:transform .3s ease-in-out}
.sidebar.open{transform:translateX(0)}
.sidebar-head{display:flex;align-items:center;justify-content:space-between;padding:1rem 1.5rem;border-bottom:1px solid #3730a3}
.sidebar-head h1{margin:0;font-size:1.5rem}
.sidebar nav{flex:1;overflow-y:auto;padding:1.5rem 1rem}
.sidebar ul{list-style:none;margin:0;padding:0}
.sidebar li a{display:flex;align-items:center;gap:.75rem;padding:.75rem 1rem;border-radius:.5rem;font-weight:500}
.sidebar li a:hover{background:rgba(255,255,255,.1)}
.sidebar-foot{display:flex;align-items:center;gap:.75rem;padding:1rem 1.5rem;border-top:1px solid #3730a3}
.avatar{height:2.5rem;width:2.5rem;border-radius:9999px;background:linear-gradient(to bottom right,#ec4899,#eab308)}
.sidebar-foot p{margin:0}
.sidebar-foot .name{font-size:.875rem;font-weight:600}
.sidebar-foot .email{font-size:.75rem;color:#a5b4fc}
.icon-btn{background:none;border:0;color:inherit;font-size:1.25rem;cursor:pointer;padding:.5rem;border-radius:9999px}
.icon-btn:hover{background:rgba(0,0,0,.05)}
.shell{min-height:100vh}
.header{position:sticky;top:0;z-index:10;background:#fff;border-bottom:1px solid #e5e7eb;box-shadow:0 1px 2px rgba(0,0,0,.05)}
.header-row{display:flex;height:4rem;align-items:center;justify-content:space-between;padding:0 1rem}
.header-title{margin:0;font-size:1.25rem;font-weight:600;color:#1f2937}
.search{flex:1;padding:0 2rem;display:none}
.search input{width:100%;max-width:28rem;padding:.5rem 1rem;border:1px solid #d1d5db;border-radius:.5rem}
.notify{position:relative}
.notify .count{position:absolute;top:0;right:0;min-width:1.1rem;padding:0 .25rem;border-radius:9999px;background:#d32f2f;color:#fff;font-size:.7rem;text-align:center}
main{padding:1rem}
.page-title{margin:0;font-size:1.875rem;font-weight:700}
.page-sub{margin:.25rem 0 1.5rem;font-size:.875rem;color:#4b5563}
.cards{display:grid;gap:1.5rem;grid-template-columns:1fr;margin-bottom:1.5rem}
.card{display:flex;align-items:center;justify-content:space-between;padding:1.5rem;background:#fff;border-radius:.75rem;box-shadow:0 4px 6px rgba(0,0,0,.1)}
.card-title{margin:0;font-size:.875rem;font-weight:500;color:#4b5563}
.card-value{margin:.5rem 0 0;font-size:1.875rem;font-weight:700}
.card-delta{margin:.25rem 0 0;font-size:.875rem;color:#16a34a}
.card-icon{padding:.75rem;border-radius:.5rem;color:#fff;font-size:1.5rem}
.grad-green{background:linear-gradient(to bottom right,#22c55e,#059669)}
.grad-blue{background:linear-gradient(to bottom right,#3b82f6,#4f46e5)}
.grad-purple{background:linear-gradient(to bottom right,#a855f7,#db2777)}
.grad-orange{background:linear-gradient(to bottom right,#f97316,#dc2626)}
.panel{background:#fff;border-radius:.75rem;box-shadow:0 4px 6px rgba(0,0,0,.1);overflow:hidden}
.panel h2{margin:0;padding:1rem 1.5rem;font-size:1.25rem;font-weight:600;border-bottom:1px solid #e5e7eb}
.table-wrap{overflow-x:auto}
table{width:100%;border-collapse:collapse}
th{padding:.75rem 1.5rem;text-align:left;font-size:.75rem;font-weight:500;text-transform:uppercase;letter-spacing:.05em;color:#6b7280;background:#f9fafb}
td{padding:1rem 1.5rem;font-size:.875rem;white-space:nowrap;border-top:1px solid #e5e7eb}
tr:hover td{background:#f9fafb}
td.strong{font-weight:600}
.badge{display:inline-flex;padding:.25rem .75rem;border-radius:9999px;font-size:.75rem;font-weight:600}
.badge-green{background:#dcfce7;color:#166534}
.badge-yellow{background:#fef9c3;color:#854d0e}
.badge-blue{background:#dbeafe;color:#1e40af}
@media (min-width:640px){.cards{grid-template-columns:repeat(2,1fr)}}
@media (min-width:768px){.search{display:block}}
@media (min-width:1024px){
.sidebar{transform:translateX(0)}
.overlay.open{display:none}
.shell{margin-left:16rem}
.header-row{padding:0 2rem}
main{padding:2rem}
.cards{grid-template-columns:repeat(4,1fr)}
.lg-hidden{display:none}
}
"#;

const SCRIPT: &str = r#"
(function () {
  var sidebar = document.getElementById('sidebar');
  var overlay = document.getElementById('sidebar-overlay');
  function toggle() {
    sidebar.classList.toggle('open');
    overlay.classList.toggle('open');
  }
  document.querySelectorAll('[data-sidebar-toggle]').forEach(function (el) {
    el.addEventListener('click', toggle);
  });
})();
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_special_characters() {
        assert_eq!(
            escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn escape_leaves_plain_text() {
        assert_eq!(escape("#12345 $299"), "#12345 $299");
    }

    #[test]
    fn group_thousands_formats() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1234), "1,234");
        assert_eq!(group_thousands(2345), "2,345");
        assert_eq!(group_thousands(1_000_000), "1,000,000");
        assert_eq!(group_thousands(-45231), "-45,231");
    }

    #[test]
    fn document_wraps_body() {
        let html = document("Admin <Panel>", "<p>hi</p>");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Admin &lt;Panel&gt;</title>"));
        assert!(html.contains("<p>hi</p>"));
        assert!(html.contains("data-sidebar-toggle"));
    }
}
