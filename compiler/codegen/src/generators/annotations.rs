use model::{Annotation, AnnotationAttribute};
use resolver::TypeResolver;
use sink::IndentingSink;

use crate::Result;

/// Render a single annotation, e.g. `@RequestMapping(path = "/api", method = { GET, POST })`.
///
/// A lone attribute named `value` is written without its name.
pub fn annotation_text(annotation: &Annotation, resolver: &dyn TypeResolver) -> Result<String> {
    let mut text = format!("@{}", resolver.shorten(annotation.name())?);
    match annotation.attributes() {
        [] => {}
        [only] if only.name == "value" => {
            text.push('(');
            text.push_str(&attribute_value(only));
            text.push(')');
        }
        attributes => {
            let rendered: Vec<String> = attributes
                .iter()
                .map(|attribute| format!("{} = {}", attribute.name, attribute_value(attribute)))
                .collect();
            text.push('(');
            text.push_str(&rendered.join(", "));
            text.push(')');
        }
    }
    Ok(text)
}

fn attribute_value(attribute: &AnnotationAttribute) -> String {
    match attribute.values.as_slice() {
        [single] => single.clone(),
        values => format!("{{ {} }}", values.join(", ")),
    }
}

/// Print each annotation on its own line, in model order.
pub fn write_annotations(
    sink: &mut dyn IndentingSink,
    annotations: &[Annotation],
    resolver: &dyn TypeResolver,
) -> Result<()> {
    for annotation in annotations {
        sink.println(&annotation_text(annotation, resolver)?);
    }
    Ok(())
}
