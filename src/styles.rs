use crate::dom::Page;

pub const ANIMATION_CSS: &str = "
@keyframes slideInUp {
    from {
        opacity: 0;
        transform: translateY(30px);
    }
    to {
        opacity: 1;
        transform: translateY(0);
    }
}

.active-section {
    color: var(--accent-cyan) !important;
}
";

pub const PRINT_CSS: &str = "
.navbar, .hero-btn, .scroll-to-top { display: none; }
body { background: white; color: black; }
.content-card { border-color: #999; background: white; }
";

pub const FOCUS_CSS: &str = "
button:focus,
a:focus,
input:focus {
    outline: 2px solid #00d9ff;
    outline-offset: 2px;
}
";

pub fn inject_all<P: Page>(page: &P) {
    page.append_style_sheet(ANIMATION_CSS, None);
    page.append_style_sheet(PRINT_CSS, Some("print"));
    page.append_style_sheet(FOCUS_CSS, None);
}
