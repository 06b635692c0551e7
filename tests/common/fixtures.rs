//! Reusable test content.

#![allow(dead_code)]

pub const STATS_JSON: &str = r#"{
  "publicPath": "/dist/",
  "assetsByChunkName": {
    "vendor": "vendor.91bc.js",
    "main": ["main.3f2a.js", "main.3f2a.css", "main.3f2a.js.map"]
  }
}"#;

pub const TEMPLATE_HTML: &str = "<html>
<head>
<!-- chunk_main_css --><!-- /chunk_main_css -->
</head>
<body>
<!-- chunk_vendor_js -->
<script src=\"old.js\"></script>
<!-- /chunk_vendor_js -->
<!-- chunk_main_js --><!-- /chunk_main_js -->
</body>
</html>
";

pub const EXPECTED_HTML: &str = "<html>
<head>
<link rel=\"stylesheet\" type=\"text/css\" href=\"/dist/main.3f2a.css\">
</head>
<body>
<script type=\"text/javascript\" src=\"/dist/vendor.91bc.js\"></script>
<script type=\"text/javascript\" src=\"/dist/main.3f2a.js\"></script>
</body>
</html>
";

pub const CONFIG_TOML: &str = r#"
[[file]]
template = "src/index.html"
target = "dist/index.html"
"#;
