//! View implementations.
//!
//! A view turns the shared catalog state and a route match into a [`Page`].
//! Views are loaded on demand by a [`ViewLoader`](super::ViewLoader) and then
//! cached, so rendering itself is synchronous.

use crate::core::collaborators::{ChartRenderer, IconRenderer};
use crate::domains::catalog::{CategoryIndex, SearchQuery, Tool, ToolRegistry};

use super::table::{RouteMatch, ViewId};

/// Rendered content of the main area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub title: String,
    pub body: Vec<String>,
}

impl Page {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: Vec::new(),
        }
    }

    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.body.push(line.into());
        self
    }

    pub fn lines(mut self, lines: impl IntoIterator<Item = String>) -> Self {
        self.body.extend(lines);
        self
    }
}

/// Everything a view may read while rendering.
pub struct RenderContext<'a> {
    pub tools: &'a ToolRegistry,
    pub categories: &'a CategoryIndex,
    pub favorites: &'a [Tool],
    pub icons: &'a dyn IconRenderer,
    pub chart: &'a dyn ChartRenderer,
}

impl RenderContext<'_> {
    fn tool_line(&self, tool: &Tool) -> String {
        let star = if self.favorites.iter().any(|f| f.id == tool.id) { "★" } else { " " };
        format!(
            "{} {} {}  {} ({})",
            star,
            self.icons.glyph(&tool.icon),
            tool.name,
            tool.description,
            tool.path()
        )
    }
}

/// A loaded view.
pub trait View: Send + Sync {
    fn id(&self) -> ViewId;

    fn render(&self, ctx: &RenderContext<'_>, route: &RouteMatch) -> Page;
}

// ============================================================================
// Builtin views
// ============================================================================

/// Landing page: categories plus the most viewed tools.
pub struct HomeView;

impl View for HomeView {
    fn id(&self) -> ViewId {
        ViewId::Home
    }

    fn render(&self, ctx: &RenderContext<'_>, _route: &RouteMatch) -> Page {
        let popular = ctx.tools.most_viewed(5);
        let series: Vec<f64> = popular.iter().map(|t| t.views as f64).collect();

        Page::new("All the tools you need")
            .line(format!("{} tools in {} categories", ctx.tools.len(), ctx.categories.all().len()))
            .line(String::new())
            .lines(ctx.categories.all().iter().map(|c| {
                format!(
                    "{} {} - {} ({})",
                    ctx.icons.glyph(&c.icon),
                    c.name,
                    c.description,
                    c.path()
                )
            }))
            .line(String::new())
            .line(format!("Popular {}", ctx.chart.render(&series)))
            .lines(popular.iter().map(|t| ctx.tool_line(t)))
    }
}

/// A static text page such as About or Privacy.
pub struct StaticPageView {
    id: ViewId,
    title: &'static str,
    paragraphs: &'static [&'static str],
}

impl StaticPageView {
    pub fn new(id: ViewId, title: &'static str, paragraphs: &'static [&'static str]) -> Self {
        Self { id, title, paragraphs }
    }
}

impl View for StaticPageView {
    fn id(&self) -> ViewId {
        self.id.clone()
    }

    fn render(&self, _ctx: &RenderContext<'_>, _route: &RouteMatch) -> Page {
        Page::new(self.title).lines(self.paragraphs.iter().map(|p| p.to_string()))
    }
}

/// Index of all categories with their tool counts.
pub struct CategoriesView;

impl View for CategoriesView {
    fn id(&self) -> ViewId {
        ViewId::Categories
    }

    fn render(&self, ctx: &RenderContext<'_>, _route: &RouteMatch) -> Page {
        Page::new("Categories").lines(ctx.categories.all().iter().map(|c| {
            format!(
                "{} {} ({} tools) {}",
                ctx.icons.glyph(&c.icon),
                c.name,
                ctx.tools.in_category(&c.id).len(),
                c.path()
            )
        }))
    }
}

/// Tools of one category. Unknown ids show the default category.
pub struct CategoryView;

impl View for CategoryView {
    fn id(&self) -> ViewId {
        ViewId::Category
    }

    fn render(&self, ctx: &RenderContext<'_>, route: &RouteMatch) -> Page {
        let category = ctx.categories.by_id(route.params.get("id").unwrap_or_default());
        let tools = ctx.tools.in_category(&category.id);

        Page::new(category.name.clone())
            .line(category.description.clone())
            .line(String::new())
            .lines(tools.iter().map(|t| ctx.tool_line(t)))
    }
}

/// Page of a single tool.
///
/// The calculator itself is an external component; this page frames it with
/// the catalog metadata.
pub struct ToolView {
    /// Fixed tool for `/tools/<id>`; `None` reads the `:id` parameter.
    tool_id: Option<String>,
}

impl ToolView {
    pub fn fixed(id: impl Into<String>) -> Self {
        Self { tool_id: Some(id.into()) }
    }

    pub fn by_param() -> Self {
        Self { tool_id: None }
    }
}

impl View for ToolView {
    fn id(&self) -> ViewId {
        match &self.tool_id {
            Some(id) => ViewId::Tool(id.clone()),
            None => ViewId::ToolDetail,
        }
    }

    fn render(&self, ctx: &RenderContext<'_>, route: &RouteMatch) -> Page {
        let id = self
            .tool_id
            .as_deref()
            .or_else(|| route.params.get("id"))
            .unwrap_or_default();

        let Some(tool) = ctx.tools.by_id(id) else {
            return Page::new("Tool not found")
                .line(format!("There is no tool called '{}'.", id))
                .line("Browse all tools at /categories".to_string());
        };

        let category = ctx.categories.by_id(&tool.category);
        let favorite = ctx.favorites.iter().any(|f| f.id == tool.id);

        Page::new(tool.name.clone())
            .line(tool.description.clone())
            .line(format!("Category: {} ({})", category.name, category.path()))
            .line(format!("{} views", tool.views))
            .line(if favorite { "★ In your favorites" } else { "☆ Add to favorites" }.to_string())
            .lines(tool.features.iter().map(|f| format!("  • {}", f)))
    }
}

/// The user's favorites, rendered from their stored snapshots.
pub struct FavoritesView;

impl View for FavoritesView {
    fn id(&self) -> ViewId {
        ViewId::Favorites
    }

    fn render(&self, ctx: &RenderContext<'_>, _route: &RouteMatch) -> Page {
        if ctx.favorites.is_empty() {
            return Page::new("Favorites").line("No favorites yet. Star a tool to keep it here.".to_string());
        }

        Page::new("Favorites").lines(ctx.favorites.iter().map(|t| ctx.tool_line(t)))
    }
}

/// Search results for `?q=..&category=..`.
pub struct SearchView;

impl View for SearchView {
    fn id(&self) -> ViewId {
        ViewId::Search
    }

    fn render(&self, ctx: &RenderContext<'_>, route: &RouteMatch) -> Page {
        let query = SearchQuery::from_query_string(&route.query);
        let results = query.apply(ctx.tools.all());

        let title = if query.q.trim().is_empty() {
            "All tools".to_string()
        } else {
            format!("Results for \"{}\"", query.q.trim())
        };

        let page = Page::new(title).line(format!("{} tools found", results.len()));
        if results.is_empty() {
            return page.line("Try a shorter or different search term.".to_string());
        }
        page.lines(results.iter().map(|t| ctx.tool_line(t)))
    }
}

/// Shown for paths with no route.
pub struct NotFoundView;

impl View for NotFoundView {
    fn id(&self) -> ViewId {
        ViewId::NotFound
    }

    fn render(&self, _ctx: &RenderContext<'_>, route: &RouteMatch) -> Page {
        Page::new("Page not found")
            .line(format!("Nothing lives at {}.", route.path))
            .line("Go back to / or search with /search?q=...".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::collaborators::{SparklineChart, TextIcons};
    use crate::domains::routes::RouteTable;

    struct Fixture {
        tools: ToolRegistry,
        categories: CategoryIndex,
        favorites: Vec<Tool>,
    }

    impl Fixture {
        fn new() -> Self {
            let categories = CategoryIndex::builtin();
            Self {
                tools: ToolRegistry::builtin(&categories),
                categories,
                favorites: Vec::new(),
            }
        }

        fn render(&self, view: &dyn View, path: &str) -> Page {
            let table = RouteTable::builtin(&self.tools).unwrap();
            let route = table.resolve(path).unwrap_or_else(|| RouteMatch {
                view: ViewId::NotFound,
                pattern: String::new(),
                path: path.to_string(),
                params: Default::default(),
                query: String::new(),
            });
            let ctx = RenderContext {
                tools: &self.tools,
                categories: &self.categories,
                favorites: &self.favorites,
                icons: &TextIcons,
                chart: &SparklineChart,
            };
            view.render(&ctx, &route)
        }
    }

    #[test]
    fn test_tool_view_fixed() {
        let page = Fixture::new().render(&ToolView::fixed("bmi-calculator"), "/tools/bmi-calculator");
        assert_eq!(page.title, "BMI Calculator");
        assert!(page.body.iter().any(|l| l.contains("Calculators")));
    }

    #[test]
    fn test_tool_view_unknown_param() {
        let page = Fixture::new().render(&ToolView::by_param(), "/tool/nope");
        assert_eq!(page.title, "Tool not found");
    }

    #[test]
    fn test_category_view_falls_back() {
        let fixture = Fixture::new();
        let page = fixture.render(&CategoryView, "/category/unknown");
        assert_eq!(page.title, fixture.categories.default_category().name);
    }

    #[test]
    fn test_search_view_filters() {
        let page = Fixture::new().render(&SearchView, "/search?q=bmi");
        assert!(page.title.contains("bmi"));
        assert!(page.body.iter().any(|l| l.contains("BMI Calculator")));
    }

    #[test]
    fn test_favorites_view_renders_dangling_snapshots() {
        let mut fixture = Fixture::new();
        fixture
            .favorites
            .push(Tool::new("retired-tool", "Retired Tool", "Gone from the catalog", "text", "i", 0, "g"));
        let page = fixture.render(&FavoritesView, "/favorites");
        assert!(page.body.iter().any(|l| l.contains("Retired Tool") && l.starts_with('★')));
    }

    #[test]
    fn test_not_found_view_mentions_path() {
        let page = Fixture::new().render(&NotFoundView, "/this-does-not-exist");
        assert!(page.body[0].contains("/this-does-not-exist"));
    }
}
