use crate::{compile, compile_document, CompileError, CompileOptions};
use pretty_assertions::assert_eq;
use sitecraft_editor::{ElementStore, NewElement};
use sitecraft_model::{
    ActionType, Configuration, DropdownLink, Element, ElementKind, Settings, Slot, Styles,
};

/// Link `children` under `parent` and return the flat list
fn family(mut parent: Element, children: Vec<Element>) -> Vec<Element> {
    let mut elements = Vec::new();
    for mut child in children {
        child.parent_id = Some(parent.id.clone());
        parent.children.push(child.id.clone());
        elements.push(child);
    }
    elements.insert(0, parent);
    elements
}

fn html(elements: &[Element]) -> String {
    compile(elements, &CompileOptions::default())
        .expect("compile")
        .html
}

#[test]
fn test_compile_paragraph() {
    let elements = vec![Element::new("p1", ElementKind::Paragraph).with_content("Hello")];
    let page = compile(&elements, &CompileOptions::default()).expect("compile");

    assert_eq!(page.html, "<p id=\"p1\" class=\"_paragraph-p1\">Hello</p>\n");
    assert!(page.css.contains("._paragraph-p1 {\n  font-size: 16px;"));
}

#[test]
fn test_navbar_two_column_regroups_children() {
    let mut store = ElementStore::new();
    let navbar = store.add_element(ElementKind::Navbar).unwrap();
    store.update_configuration(&navbar, "layout", "twoColumn".into());

    // stored out of display order
    let button = store
        .add_element(NewElement::new(ElementKind::Button).parent(navbar.as_str()))
        .unwrap();
    let span_a = store
        .add_element(NewElement::new(ElementKind::Span).parent(navbar.as_str()))
        .unwrap();
    let image = store
        .add_element(NewElement::new(ElementKind::Image).parent(navbar.as_str()))
        .unwrap();
    let span_b = store
        .add_element(NewElement::new(ElementKind::Span).parent(navbar.as_str()))
        .unwrap();

    store.update_content(&button, "Get Started");
    store.update_content(&span_a, "Home");
    store.update_content(&image, "/logo.png");
    store.update_content(&span_b, "About");

    let out = html(store.elements());

    assert_eq!(out.matches("class=\"logoContainer\"").count(), 1);
    assert_eq!(out.matches("class=\"buttonContainer\"").count(), 1);
    assert!(!out.contains("linksContainer"));

    let logo = out.find("class=\"logoContainer\"").unwrap();
    let buttons = out.find("class=\"buttonContainer\"").unwrap();
    let img = out.find("<img").unwrap();
    assert!(logo < img && img < buttons);

    let group = &out[buttons..];
    let home = group.find(">Home</span>").unwrap();
    let about = group.find(">About</span>").unwrap();
    let cta = group.find(">Get Started</button>").unwrap();
    assert!(home < about && about < cta);
}

#[test]
fn test_navbar_from_template_uses_explicit_slots() {
    let mut store = ElementStore::new();
    store
        .add_element(NewElement::new(ElementKind::Navbar).structure("threeColumn"))
        .unwrap();

    let out = html(store.elements());

    assert!(out.starts_with("<nav "));
    assert!(out.contains("class=\"linksContainer\""));
    assert_eq!(out.matches("<span").count(), 3);
    assert!(out.contains(">Connect Wallet</button>"));
}

#[test]
fn test_navbar_styles_include_sub_rules() {
    let navbar = Element::new("nav1", ElementKind::Navbar)
        .with_configuration(Configuration::new().with("layout", "threeColumn"))
        .with_styles(Styles::new().with("backgroundColor", "#000000"));
    let logo = Element::new("logo", ElementKind::Image).with_content("/logo.png");

    let page = compile(&family(navbar, vec![logo]), &CompileOptions::default()).unwrap();

    assert!(page.css.contains("background-color: #000000;"));
    assert!(page.css.contains("._navbar-nav1 .logoContainer img {\n  height: 40px;\n}"));
    assert!(page
        .css
        .contains("._navbar-nav1 .linksContainer {\n  align-items: center;\n  display: flex;\n  flex: 1;\n  gap: 24px;\n  justify-content: center;\n}"));
}

#[test]
fn test_unknown_type_renders_nothing() {
    let elements = vec![
        Element::new("x1", ElementKind::Other("marquee".into())).with_content("Scrolling"),
        Element::new("p1", ElementKind::Paragraph).with_content("Still here"),
    ];

    let out = html(&elements);

    assert!(!out.contains("Scrolling"));
    assert!(out.contains("Still here"));
}

#[test]
fn test_cta_without_title_omits_slot() {
    let cta = Element::new("cta1", ElementKind::Cta)
        .with_configuration(Configuration::new().with("layout", "ctaOne"));
    let children = vec![
        Element::new("d1", ElementKind::Paragraph).with_content("Join today"),
        Element::new("b1", ElementKind::Button).with_content("Sign Up"),
    ];

    let out = html(&family(cta, children));

    assert!(!out.contains("<h"));
    assert!(out.contains("class=\"ctaContent\""));
    assert!(out.contains(">Join today</p>"));
    assert!(!out.contains("ctaImage"));
}

#[test]
fn test_first_title_wins() {
    let cta = Element::new("cta1", ElementKind::Cta);
    let children = vec![
        Element::new("h1", ElementKind::Heading).with_content("First").with_level(2),
        Element::new("h2", ElementKind::Heading).with_content("Second").with_level(2),
        Element::new("b1", ElementKind::Button).with_content("One"),
        Element::new("b2", ElementKind::Button).with_content("Two"),
    ];

    let out = html(&family(cta, children));

    assert!(out.contains(">First</h2>"));
    assert!(!out.contains("Second"));
    assert!(out.contains(">One</button>"));
    assert!(out.contains(">Two</button>"));
}

#[test]
fn test_explicit_slot_overrides_heuristic() {
    let hero = Element::new("hero1", ElementKind::Hero);
    let children = vec![
        Element::new("s1", ElementKind::Span).with_content("Tagline"),
        Element::new("s2", ElementKind::Span)
            .with_content("Headline")
            .with_slot(Slot::Title),
    ];

    let out = html(&family(hero, children));

    assert!(out.find("Headline").unwrap() < out.find("Tagline").unwrap());
}

#[test]
fn test_hero_two_puts_image_first() {
    let hero = Element::new("hero1", ElementKind::Hero)
        .with_configuration(Configuration::new().with("layout", "heroTwo"));
    let children = vec![
        Element::new("t", ElementKind::Heading).with_content("Title"),
        Element::new("i", ElementKind::Image).with_content("/hero.png"),
    ];

    let out = html(&family(hero, children));

    assert!(out.find("heroImage").unwrap() < out.find("heroContent").unwrap());
}

#[test]
fn test_footer_detects_copyright() {
    let footer = Element::new("f1", ElementKind::Footer);
    let children = vec![
        Element::new("c", ElementKind::Span).with_content("© 2024 Company"),
        Element::new("l", ElementKind::Span).with_content("Privacy"),
    ];

    let out = html(&family(footer, children));

    let links = out.find("class=\"footerLinks\"").unwrap();
    let bottom = out.find("class=\"footerBottom\"").unwrap();
    assert!(links < bottom);
    assert!(out[bottom..].contains("© 2024 Company"));
    assert!(out[links..bottom].contains("Privacy"));
}

#[test]
fn test_minting_section_layout() {
    let mut store = ElementStore::new();
    store
        .add_element(NewElement::new(ElementKind::MintingSection).structure("mintingSection"))
        .unwrap();

    let out = html(store.elements());

    for class in [
        "mintingHeader",
        "mintingBody",
        "mintImage",
        "mintDetails",
        "mintTimer",
        "mintPrice",
        "mintControls",
        "rareItems",
    ] {
        assert_eq!(
            out.matches(&format!("class=\"{}\"", class)).count(),
            1,
            "{}",
            class
        );
    }

    let rare = out.find("class=\"rareItems\"").unwrap();
    assert_eq!(out[rare..].matches("<img").count(), 3);
    assert!(out.contains("data-wallets=\"phantom,solflare\""));
}

#[test]
fn test_minting_heuristic_without_slots() {
    let section = Element::new("m1", ElementKind::MintingSection);
    let children = vec![
        Element::new("r1", ElementKind::Image).with_content("/art.png"),
        Element::new("r2", ElementKind::Image).with_content("/rare.png"),
        Element::new("p", ElementKind::Span).with_content("0.08 ETH"),
        Element::new("t", ElementKind::Span).with_content("Ends in 01:00:00"),
    ];

    let out = html(&family(section, children));

    let image = out.find("class=\"mintImage\"").unwrap();
    let rare = out.find("class=\"rareItems\"").unwrap();
    assert!(out[image..rare].contains("/art.png"));
    assert!(out[rare..].contains("/rare.png"));
    assert!(out.find("mintTimer").unwrap() < out.find("mintPrice").unwrap());
}

#[test]
fn test_hover_styles_reach_stylesheet() {
    let button = Element::new("b1", ElementKind::Button)
        .with_content("Go")
        .with_styles(Styles::new().with_hover("backgroundColor", "#222222"));

    let page = compile(&[button], &CompileOptions::default()).unwrap();

    assert!(page
        .css
        .contains("._button-b1:hover {\n  background-color: #222222;\n  opacity: 0.9;\n}"));
}

#[test]
fn test_dropdown_block_follows_button() {
    let button = Element::new("b1", ElementKind::Button)
        .with_content("Menu")
        .with_settings(Settings {
            action_type: Some(ActionType::Dropdown),
            dropdown_links: Some(vec![
                DropdownLink {
                    label: "Docs".into(),
                    href: "/docs".into(),
                },
                DropdownLink {
                    label: "Blog".into(),
                    href: "/blog".into(),
                },
            ]),
            ..Default::default()
        });

    let out = html(&[button]);

    assert!(out.contains("getElementById('dropdown-b1')"));
    let menu = out
        .find("<div id=\"dropdown-b1\" class=\"dropdown-menu\" style=\"display:none\">")
        .unwrap();
    assert!(out.find("</button>").unwrap() < menu);
    assert!(out[menu..].contains("<a href=\"/docs\">Docs</a>"));
    assert!(out[menu..].contains("<a href=\"/blog\">Blog</a>"));
}

#[test]
fn test_page_section_script() {
    let button = Element::new("b1", ElementKind::Button)
        .with_content("About")
        .with_settings(Settings {
            action_type: Some(ActionType::PageSection),
            target_value: Some("about".into()),
            ..Default::default()
        });

    assert!(html(&[button]).contains(
        "onclick=\"document.getElementById('about').scrollIntoView({ behavior: 'smooth' })\""
    ));
}

#[test]
fn test_self_closing_tags() {
    let form = Element::new("f1", ElementKind::Form);
    let children = vec![
        Element::new("i1", ElementKind::Input).with_content("prefilled"),
        Element::new("hr1", ElementKind::Hr),
        Element::new("br1", ElementKind::LineBreak),
    ];

    let out = html(&family(form, children));

    assert!(out.contains("<input id=\"i1\" class=\"_input-i1\" type=\"text\" value=\"prefilled\" />"));
    assert!(out.contains("<hr id=\"hr1\" class=\"_hr-hr1\" />"));
    assert!(out.contains("<br id=\"br1\" class=\"_line-break-br1\" />"));
    assert!(!out.contains("</input>"));
}

#[test]
fn test_content_is_escaped() {
    let paragraph =
        Element::new("p1", ElementKind::Paragraph).with_content("<script>alert('x')</script>");

    let out = html(&[paragraph]);

    assert!(out.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
    assert!(!out.contains("<script>"));
}

#[test]
fn test_children_follow_content() {
    let list = Element::new("l1", ElementKind::List)
        .with_configuration(Configuration::new().with("listType", "ordered"));
    let items = vec![
        Element::new("a", ElementKind::ListItem).with_content("One"),
        Element::new("b", ElementKind::ListItem).with_content("Two"),
    ];

    let out = html(&family(list, items));

    assert_eq!(
        out,
        "<ol id=\"l1\" class=\"_list-l1\">\n  <li id=\"a\" class=\"_list-item-a\">One</li>\n  <li id=\"b\" class=\"_list-item-b\">Two</li>\n</ol>\n"
    );
}

#[test]
fn test_template_styles_are_layered() {
    let mut store = ElementStore::new();
    let form = store
        .add_element(NewElement::new(ElementKind::Form).structure("contact"))
        .unwrap();
    store.update_styles(&form, &Styles::new().with("gap", "20px"));

    let page = compile(store.elements(), &CompileOptions::default()).unwrap();

    assert!(page.css.contains("max-width: 480px;"));
    assert!(page.css.contains("gap: 20px;"));
    assert!(!page.css.contains("gap: 12px;"));
}

#[test]
fn test_compact_output() {
    let options = CompileOptions {
        pretty: false,
        ..Default::default()
    };
    let list = Element::new("l1", ElementKind::List);
    let items = vec![Element::new("a", ElementKind::ListItem).with_content("One")];

    let page = compile(&family(list, items), &options).unwrap();

    assert_eq!(
        page.html,
        "<ul id=\"l1\" class=\"_list-l1\"><li id=\"a\" class=\"_list-item-a\">One</li></ul>"
    );
    assert!(!page.css.contains('\n'));
}

#[test]
fn test_compile_document() {
    let elements = vec![Element::new("p1", ElementKind::Paragraph).with_content("Hello")];
    let options = CompileOptions {
        title: "Launch & Learn".into(),
        ..Default::default()
    };

    let page = compile_document(&elements, &options).unwrap();

    assert!(page.html.starts_with("<!DOCTYPE html>\n<html lang=\"en\">\n"));
    assert!(page.html.contains("    <title>Launch &amp; Learn</title>\n"));
    assert!(page.html.contains("    <style>\n      ._paragraph-p1 {\n"));
    assert!(page
        .html
        .contains("  <body>\n    <p id=\"p1\" class=\"_paragraph-p1\">Hello</p>\n  </body>\n"));
    assert!(page.html.ends_with("</html>\n"));
}

#[test]
fn test_compile_document_links_stylesheet() {
    let elements = vec![Element::new("p1", ElementKind::Paragraph).with_content("Hello")];
    let options = CompileOptions {
        stylesheet_href: Some("styles.css".into()),
        ..Default::default()
    };

    let page = compile_document(&elements, &options).unwrap();

    assert!(page.html.contains("<link rel=\"stylesheet\" href=\"styles.css\">"));
    assert!(!page.html.contains("<style>"));
    assert!(page.css.contains("._paragraph-p1"));
}

#[test]
fn test_depth_limit() {
    let mut elements = Vec::new();
    let mut parent: Option<String> = None;
    for i in 0..5 {
        let mut div = Element::new(format!("d{}", i), ElementKind::Div);
        div.parent_id = parent.clone();
        if i < 4 {
            div.children.push(format!("d{}", i + 1));
        }
        parent = Some(div.id.clone());
        elements.push(div);
    }

    let options = CompileOptions {
        max_depth: 3,
        ..Default::default()
    };

    assert_eq!(
        compile(&elements, &options),
        Err(CompileError::DepthExceeded {
            id: "d3".into(),
            limit: 3
        })
    );
}

#[test]
fn test_moved_social_button_joins_navbar_buttons() {
    let mut store = ElementStore::new();
    let footer = store
        .add_element(NewElement::new(ElementKind::Footer).structure("detailed"))
        .unwrap();
    let navbar = store
        .add_element(NewElement::new(ElementKind::Navbar).structure("twoColumn"))
        .unwrap();

    let twitter = store
        .find_by_id(&footer)
        .unwrap()
        .children
        .iter()
        .find(|id| store.find_by_id(id).and_then(|e| e.text()) == Some("Twitter"))
        .cloned()
        .unwrap();
    store.move_element(&twitter, Some(&navbar), 99).unwrap();

    let out = html(store.elements());

    let buttons = out.find("class=\"buttonContainer\"").unwrap();
    assert!(out[buttons..].contains(">Twitter</button>"));
}

#[test]
fn test_slot_foreign_to_composite_falls_back_to_type() {
    let navbar = Element::new("nav1", ElementKind::Navbar);
    let children = vec![
        Element::new("b1", ElementKind::Button)
            .with_content("Follow")
            .with_slot(Slot::Social),
        Element::new("b2", ElementKind::Button)
            .with_content("Join")
            .with_slot(Slot::Button),
    ];

    let out = html(&family(navbar, children));

    let buttons = out.find("class=\"buttonContainer\"").unwrap();
    let group = &out[buttons..];
    assert!(group.find(">Follow</button>").unwrap() < group.find(">Join</button>").unwrap());
}

#[test]
fn test_compile_document_keeps_preformatted_text() {
    let section = Element::new("s1", ElementKind::Section);
    let children = vec![Element::new("pre1", ElementKind::Pre).with_content("line1\nline2")];

    let page = compile_document(&family(section, children), &CompileOptions::default()).unwrap();

    assert!(page.html.contains(">line1\nline2</pre>\n"));
    assert!(page
        .html
        .contains("  <body>\n    <section "));
}
