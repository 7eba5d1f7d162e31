//! MERGEFIELD field codes written as flat-OPC markup.
//!
//! The package has a relationships part and a document part whose body holds
//! one paragraph of five runs: field begin, instruction, field separator,
//! displayed result, field end. Merge tools that scan for field codes find
//! the token in the instruction regardless of any custom marker syntax.

use common::markup::escape_xml;
use common::PlaceholderToken;

use crate::host::Mutation;

const PACKAGE_HEAD: &str = concat!(
    r#"<pkg:package xmlns:pkg="http://schemas.microsoft.com/office/2006/xmlPackage">"#,
    r#"<pkg:part pkg:name="/_rels/.rels" pkg:contentType="application/vnd.openxmlformats-package.relationships+xml">"#,
    r#"<pkg:xmlData><Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>"#,
    r#"</Relationships></pkg:xmlData></pkg:part>"#,
    r#"<pkg:part pkg:name="/word/document.xml" pkg:contentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml">"#,
    r#"<pkg:xmlData><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">"#,
    r#"<w:body><w:p>"#,
);

const PACKAGE_TAIL: &str = "</w:p></w:body></w:document></pkg:xmlData></pkg:part></pkg:package>";

fn field_char(kind: &str) -> String {
    format!(r#"<w:r><w:fldChar w:fldCharType="{}"/></w:r>"#, kind)
}

/// Builds the markup package for `token`. The token is escaped here, once.
pub fn package(token: &PlaceholderToken) -> String {
    let escaped = escape_xml(token.as_str());
    let mut markup = String::from(PACKAGE_HEAD);
    markup.push_str(&field_char("begin"));
    markup.push_str(&format!(
        r#"<w:r><w:instrText xml:space="preserve"> MERGEFIELD  {}  \* MERGEFORMAT </w:instrText></w:r>"#,
        escaped
    ));
    markup.push_str(&field_char("separate"));
    markup.push_str(&format!("<w:r><w:t>«{}»</w:t></w:r>", escaped));
    markup.push_str(&field_char("end"));
    markup.push_str(PACKAGE_TAIL);
    markup
}

/// Inserts the package at the end of the selection.
pub fn structural_insert(token: &PlaceholderToken) -> Mutation {
    Mutation::InsertMarkup {
        package: package(token),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::markup::read_field_code;
    use proptest::prelude::*;

    #[test]
    fn test_package_runs_in_order() {
        let markup = package(&PlaceholderToken::literal("$Fecha"));
        let begin = markup.find(r#"w:fldCharType="begin""#).unwrap();
        let instruction = markup.find("MERGEFIELD").unwrap();
        let separate = markup.find(r#"w:fldCharType="separate""#).unwrap();
        let display = markup.find("«$Fecha»").unwrap();
        let end = markup.find(r#"w:fldCharType="end""#).unwrap();
        assert!(begin < instruction && instruction < separate);
        assert!(separate < display && display < end);
        assert!(markup.contains("word/document.xml"));
    }

    #[test]
    fn test_instruction_text() {
        let field = read_field_code(&package(&PlaceholderToken::literal("$r.total"))).unwrap();
        assert_eq!(field.instruction, " MERGEFIELD  $r.total  \\* MERGEFORMAT ");
        assert_eq!(field.display, "«$r.total»");
    }

    #[test]
    fn test_token_is_escaped_once() {
        let markup = package(&PlaceholderToken::literal("$a<b>&c"));
        assert!(markup.contains("$a&lt;b&gt;&amp;c"));
        assert!(!markup.contains("&amp;amp;"));

        let field = read_field_code(&markup).unwrap();
        assert_eq!(field.merge_token(), Some("$a<b>&c"));
    }

    #[test]
    fn test_loop_control_package() {
        let token = PlaceholderToken::loop_control(common::LoopControl::Open);
        let field = read_field_code(&package(&token)).unwrap();
        assert_eq!(field.merge_token(), Some("#foreach($r in $resultados)"));
        assert_eq!(field.display, "«#foreach($r in $resultados)»");
    }

    proptest! {
        #[test]
        fn prop_merge_tools_read_back_the_raw_token(raw in "[$#][a-zA-Z0-9.&<>\"'()]{1,20}") {
            let token = PlaceholderToken::literal(raw.clone());
            let field = read_field_code(&package(&token)).unwrap();
            prop_assert_eq!(field.merge_token(), Some(raw.as_str()));
            prop_assert_eq!(field.display, format!("«{}»", raw));
        }
    }
}
