mod docx_exporter_test;
