//! Template catalog.
//!
//! Pure generators for every artifact a starter project embeds. Each one is
//! deterministic and takes no input: no timestamps, no environment paths.
//! Two scaffold runs produce byte-identical artifacts.

use crate::config::{HindsightConfig, PageData};

/// Default `hindsight.json` document.
pub fn config() -> HindsightConfig {
    HindsightConfig {
        data: PageData {
            title: "This is a sample page title!".to_string(),
            header: "This is a header.".to_string(),
            footer: "<div class='footer'>This is the footer. You can write HTML \
                     for placeholders too! <br>It only needs to be a string.</div>"
                .to_string(),
        },
    }
}

/// Page template markup.
///
/// The `{{ title }}`, `{{ header }}` and `{{ footer }}` tokens are replaced
/// with values from `hindsight.json`; `{{ $contents }}` marks where the
/// composed document body is injected. The token syntax is a contract with
/// the compose step and must not change.
pub fn page_html() -> &'static str {
    r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{ title }}</title>
  </head>
  <body>
    <h1>{{ header }}</h1>
    {{ $contents }}
    {{ footer }}
  </body>
</html>
"#
}

/// Sample content document, one example per supported Markdown construct.
pub fn index_md() -> &'static str {
    r#"## Wow! You have just created your first Hindsight project.

You write your content in Markdown. <br>Hindsight converts it to HTML, then puts it inside your template **'page.html'** file.<br>The only limit is your imagination in Markdown!

- This is an unordered list
- This is an unordered list
  - This is a list inside a list

1. This is an ordered list
2. The second list element!

[This is a permanent link.](#)

[This is a link to Wikipedia.](https://wikipedia.org)

> This is a quote!

------

```html
<p id='sample-paragraph'>This is a code block!</p>
```

| This is the first column | This is the second column |
| ------------------------ | ------------------------- |
|       hello world        |  just the second content  |
"#
}

/// Guide text for the project root.
pub fn readme_txt() -> &'static str {
    r#"Hi there!
This is a simple guide to Hindsight.
Well, if you want to see how it works, just try to 'compose' this project.
It means, run 'hindsight compose' in this folder from the Terminal/Command Line.
If it succeeds, open the index.html file in the "composed" directory.
"#
}
