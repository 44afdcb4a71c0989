//! Static import payloads served verbatim.

/// CSV sample: header row plus three data rows.
pub const CSV_TEXT: &str = "pk,col1,col2,col3
1,a,b,c
2,d,e,f
3,g,h,i
";

/// SQL script creating `t1` and `t2` on their own branches and `t3` on main.
///
/// Byte-exact, including the trailing blanks after `col3` in `t2` and `t3`.
pub const SQL_TEXT: &str = "CALL DOLT_CHECKOUT('-b', 'import-branch-1');\n\
CREATE TABLE t1 (\n\
pk int primary key,\n\
col1 varchar(55),\n\
col2 varchar(55),\n\
col3 varchar(55)\n\
);\n\
INSERT INTO t1 (pk, col1, col2, col3) VALUES (1, 'a', 'b', 'c');\n\
INSERT INTO t1 (pk, col1, col2, col3) VALUES (2, 'd', 'e', 'f');\n\
INSERT INTO t1 (pk, col1, col2, col3) VALUES (3, 'g', 'h', 'i');\n\
CALL DOLT_COMMIT('-A', '-m', 'Create table t1');\n\
CALL DOLT_CHECKOUT('main');\n\
CALL DOLT_CHECKOUT('-b', 'import-branch-2');\n\
CREATE TABLE t2 (\n\
pk int primary key,\n\
col1 varchar(55),\n\
col2 varchar(55),\n\
col3 varchar(55)    \n\
);\n\
INSERT INTO t2 (pk, col1, col2, col3) VALUES (1, 'j', 'k', 'l');\n\
INSERT INTO t2 (pk, col1, col2, col3) VALUES (2, 'm', 'n', 'o');\n\
INSERT INTO t2 (pk, col1, col2, col3) VALUES (3, 'p', 'q', 'r');\n\
CALL DOLT_COMMIT('-A', '-m', 'Create table t2');\n\
CALL DOLT_CHECKOUT('main');\n\
CREATE TABLE t3 (\n\
pk int primary key,\n\
col1 varchar(55),\n\
col2 varchar(55),\n\
col3 varchar(55)    \n\
);\n\
INSERT INTO t3 (pk, col1, col2, col3) VALUES (1, 's', 't', 'u');\n\
INSERT INTO t3 (pk, col1, col2, col3) VALUES (2, 'v', 'w', 'x');\n\
INSERT INTO t3 (pk, col1, col2, col3) VALUES (3, 'y', 'z', 'aa');\n";
