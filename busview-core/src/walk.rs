//! Discovery and rendering of an object tree.

use std::io::Write;

use futures_util::{future::LocalBoxFuture, FutureExt};

use crate::{node::child_path, style::Role, Introspectable, Renderer};

/// Walk configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalkOptions {
    /// Only print the object paths.
    pub terse: bool,
    /// Descend into child objects. When unset, only the start path is rendered. A terse walk
    /// always lists the whole subtree.
    pub recursive: bool,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            terse: false,
            recursive: true,
        }
    }
}

/// Walks the object tree of a destination through an [`Introspectable`] provider.
///
/// Objects are visited depth first, children in the order the provider reports them. Every object
/// costs one introspection call, plus one call per property when values are rendered. There is no
/// protection against a provider reporting an object as its own descendant.
#[derive(Debug)]
pub struct Walker<P> {
    provider: P,
    renderer: Renderer,
    options: WalkOptions,
}

impl<P> Walker<P>
where
    P: Introspectable,
{
    /// Create a new walker.
    pub fn new(provider: P, renderer: Renderer, options: WalkOptions) -> Self {
        Self {
            provider,
            renderer,
            options,
        }
    }

    /// The provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Release the provider.
    pub fn into_provider(self) -> P {
        self.provider
    }

    /// Walk `destination` starting at `path`, writing the rendering to `out`.
    ///
    /// Any provider failure aborts the walk and is returned.
    pub async fn walk<W: Write>(
        &mut self,
        out: &mut W,
        destination: &str,
        path: &str,
    ) -> crate::Result<()> {
        self.walk_path(out, destination, path.to_owned()).await
    }

    fn walk_path<'a, W: Write>(
        &'a mut self,
        out: &'a mut W,
        destination: &'a str,
        path: String,
    ) -> LocalBoxFuture<'a, crate::Result<()>> {
        async move {
            debug!("Introspecting {path} on {destination}");
            let node = self.provider.introspect(destination, &path).await?;

            if self.options.terse {
                writeln!(out, "{path}")?;
            } else {
                writeln!(out, "{}", self.renderer.style().paint(&path, Role::Path))?;
                let values = self
                    .renderer
                    .fetch_values(&mut self.provider, destination, &path, &node)
                    .await;
                self.renderer.render(out, &node, 1, values.as_ref())?;
            }

            if !self.options.recursive && !self.options.terse {
                return Ok(());
            }

            for child in node.children() {
                self.walk_path(out, destination, child_path(&path, child))
                    .await?;
            }

            Ok(())
        }
        .boxed_local()
    }
}

#[cfg(all(test, feature = "xml"))]
mod tests {
    use super::*;
    use crate::{render::RenderOptions, test_utils::MockProvider, Error};
    use pretty_assertions::assert_eq;

    fn tree() -> MockProvider {
        MockProvider::new()
            .with_node(
                "/",
                r#"<node><node name="org"/><node name="com"/></node>"#,
            )
            .with_node("/org", r#"<node><node name="example"/></node>"#)
            .with_node(
                "/org/example",
                r#"<node>
                     <interface name="org.example.Echo">
                       <method name="Echo">
                         <arg name="text" type="s" direction="in"/>
                         <arg name="text" type="s" direction="out"/>
                       </method>
                       <property name="Count" type="t" access="read"/>
                     </interface>
                   </node>"#,
            )
            .with_node("/com", "<node/>")
            .with_property("/org/example", "org.example.Echo", "Count", Ok("42"))
    }

    async fn walk(provider: MockProvider, options: WalkOptions, path: &str) -> (String, MockProvider) {
        let mut walker = Walker::new(provider, Renderer::new(RenderOptions::default()), options);
        let mut out = Vec::new();
        walker.walk(&mut out, "org.example", path).await.unwrap();
        (String::from_utf8(out).unwrap(), walker.into_provider())
    }

    #[test_log::test(tokio::test)]
    async fn full_tree() {
        let (out, provider) = walk(tree(), WalkOptions::default(), "/").await;
        assert_eq!(
            out,
            "\
/
/org
/org/example
  org.example.Echo
    Methods
      Echo(text String) → (text String)
    Properties
      Count Uint64 [read] = 42
/com
"
        );
        assert_eq!(provider.introspect_calls(), ["/", "/org", "/org/example", "/com"]);
    }

    #[tokio::test]
    async fn terse_tree() {
        let options = WalkOptions {
            terse: true,
            ..WalkOptions::default()
        };
        let (out, provider) = walk(tree(), options, "/").await;
        assert_eq!(out, "/\n/org\n/org/example\n/com\n");
        assert!(provider.property_calls().is_empty());
    }

    #[tokio::test]
    async fn single_path() {
        let options = WalkOptions {
            recursive: false,
            ..WalkOptions::default()
        };
        let (out, provider) = walk(tree(), options, "/org").await;
        assert_eq!(out, "/org\n");
        assert_eq!(provider.introspect_calls(), ["/org"]);
    }

    #[tokio::test]
    async fn terse_subtree() {
        let options = WalkOptions {
            terse: true,
            recursive: false,
        };
        let (out, provider) = walk(tree(), options, "/org").await;
        assert_eq!(out, "/org\n/org/example\n");
        assert_eq!(provider.introspect_calls(), ["/org", "/org/example"]);
    }

    #[tokio::test]
    async fn provider_failure() {
        let provider = tree().with_node("/org", r#"<node><node name="missing"/></node>"#);
        let mut walker = Walker::new(
            provider,
            Renderer::new(RenderOptions::default()),
            WalkOptions::default(),
        );
        let mut out = Vec::new();
        let res = walker.walk(&mut out, "org.example", "/").await;
        assert!(matches!(res, Err(Error::Provider(_))));
        // Everything up to the failing object was rendered, the remaining siblings were not.
        assert_eq!(String::from_utf8(out).unwrap(), "/\n/org\n");
        assert_eq!(
            walker.provider().introspect_calls(),
            ["/", "/org", "/org/missing"]
        );
    }
}
